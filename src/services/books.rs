//! Book catalog service: payload validation in front of the store

use validator::{Validate, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookUpdate, NewBook},
    repository::{Repository, StoreError},
};

pub const BLANK_FIELDS_MESSAGE: &str =
    "Le nom, l'auteur et l'éditeur ne peuvent pas être vides ou ne contenir que des espaces.";

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::Conflict(_) => AppError::Conflict(err.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list_all().await
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get(id).await.map_err(|err| match err {
            StoreError::NotFound(_) => AppError::NotFound(
                "Le livre demandé n'a pas été trouvé. Veuillez vérifier l'ID du livre et réessayer."
                    .to_string(),
            ),
            other => other.into(),
        })
    }

    pub async fn create(&self, data: NewBook) -> AppResult<Book> {
        check_payload(&data)?;
        let book = self.repository.books.insert(data.into()).await?;
        tracing::info!(id = book.id, "Book created");
        Ok(book)
    }

    /// Replace the book at `id`; the identifier from the URL always wins
    pub async fn update(&self, id: i64, data: BookUpdate) -> AppResult<Book> {
        check_payload(&data)?;
        let book = self
            .repository
            .books
            .update(id, data.into_book(id))
            .await
            .map_err(|err| match err {
                StoreError::NotFound(id) => AppError::NotFound(format!(
                    "Désolé, nous n'avons pas pu trouver le livre {} que vous cherchez. Veuillez vérifier l'ID et réessayer.",
                    id
                )),
                other => other.into(),
            })?;
        tracing::info!(id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<Book> {
        let book = self.repository.books.delete(id).await?;
        tracing::info!(id = book.id, "Book deleted");
        Ok(book)
    }
}

/// Reject blank text fields (one message for all three) before anything
/// reaches the store
fn check_payload(payload: &impl Validate) -> AppResult<()> {
    payload.validate().map_err(validation_error)
}

fn validation_error(errors: ValidationErrors) -> AppError {
    let fields = errors.errors();
    if fields.len() == 1 && fields.contains_key("id") {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Identifiant invalide.".to_string());
        return AppError::Validation(message);
    }
    AppError::Validation(BLANK_FIELDS_MESSAGE.to_string())
}
