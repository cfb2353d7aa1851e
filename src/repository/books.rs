//! In-memory book store
//!
//! All records live in an insertion-ordered map guarded by a single
//! `RwLock`: writers are serialized, readers share the lock. Clones of
//! [`BookStore`] point to the same map.

use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Book, SeedBook};

use super::seed;

/// Failures reported by the store itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Le livre {0} n'existe pas.")]
    NotFound(i64),

    #[error("Le livre avec l'ID {0} existe déjà !")]
    Conflict(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<RwLock<IndexMap<i64, Book>>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed entries, numbering them 1..=N in order
    pub fn from_seed(entries: Vec<SeedBook>) -> Self {
        Self::from_books(seed::assign_identifiers(entries))
    }

    /// Build a store from already identified books. Later duplicates replace
    /// earlier ones.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let map = books.into_iter().map(|book| (book.id, book)).collect();
        Self {
            books: Arc::new(RwLock::new(map)),
        }
    }

    /// Every stored book, in insertion order
    pub async fn list_all(&self) -> Vec<Book> {
        self.books.read().await.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn get(&self, id: i64) -> StoreResult<Book> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Store a new book under its own identifier
    pub async fn insert(&self, book: Book) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.id) {
            return Err(StoreError::Conflict(book.id));
        }
        books.insert(book.id, book.clone());
        tracing::debug!(id = book.id, total = books.len(), "book inserted");
        Ok(book)
    }

    /// Replace the book stored at `id`. The stored identifier stays `id`
    /// whatever `book.id` holds.
    pub async fn update(&self, id: i64, mut book: Book) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        let slot = books.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if book.id != id {
            tracing::debug!(id, payload_id = book.id, "ignoring payload identifier");
        }
        book.id = id;
        *slot = book.clone();
        tracing::debug!(id, "book updated");
        Ok(book)
    }

    /// Remove and return the book stored at `id`
    pub async fn delete(&self, id: i64) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        // shift_remove keeps the order of the remaining records
        let book = books.shift_remove(&id).ok_or(StoreError::NotFound(id))?;
        tracing::debug!(id, total = books.len(), "book deleted");
        Ok(book)
    }
}
