//! API handlers for Livres REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Book identifier taken from the URL, guaranteed to be an integer >= 1.
///
/// Anything else is rejected with 422 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Schema(rejection.body_text()))?;

        parse_book_id(&raw).map(BookIdPath)
    }
}

fn parse_book_id(raw: &str) -> Result<i64, AppError> {
    let id: i64 = raw.parse().map_err(|_| {
        AppError::Schema(format!(
            "path parameter `id`: input should be a valid integer, got `{}`",
            raw
        ))
    })?;

    if id < 1 {
        return Err(AppError::Schema(format!(
            "path parameter `id`: input should be greater than or equal to 1, got {}",
            id
        )));
    }

    Ok(id)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/Livres", get(books::list_books))
        .route("/total_livres", get(books::count_books))
        .route("/livre/", post(books::create_book))
        .route("/livre", post(books::create_book))
        .route(
            "/livre/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
