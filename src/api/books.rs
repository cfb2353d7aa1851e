//! Book endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookTotal, BookUpdate, NewBook},
};

use super::BookIdPath;

/// List all books
#[utoipa::path(
    get,
    path = "/Livres",
    tag = "livres",
    responses(
        (status = 200, description = "Every stored book", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Count stored books
#[utoipa::path(
    get,
    path = "/total_livres",
    tag = "livres",
    responses(
        (status = 200, description = "Number of books", body = BookTotal)
    )
)]
pub async fn count_books(State(state): State<crate::AppState>) -> Json<BookTotal> {
    Json(BookTotal {
        total: state.services.books.count().await,
    })
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/livre/{id}",
    tag = "livres",
    params(("id" = i64, Path, description = "Book ID (>= 1)")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    BookIdPath(id): BookIdPath,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/livre/",
    tag = "livres",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Blank field or identifier already used", body = crate::error::ErrorResponse),
        (status = 422, description = "Malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<NewBook>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(data).await?;
    Ok(Json(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/livre/{id}",
    tag = "livres",
    params(("id" = i64, Path, description = "Book ID (>= 1)")),
    request_body = BookUpdate,
    responses(
        (status = 200, description = "Book updated, identifier taken from the path", body = Book),
        (status = 400, description = "Blank field", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid identifier or malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    BookIdPath(id): BookIdPath,
    WithRejection(Json(data), _): WithRejection<Json<BookUpdate>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/livre/{id}",
    tag = "livres",
    params(("id" = i64, Path, description = "Book ID (>= 1)")),
    responses(
        (status = 200, description = "Deleted book", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    BookIdPath(id): BookIdPath,
) -> AppResult<Json<Book>> {
    let book = state.services.books.delete(id).await?;
    Ok(Json(book))
}
