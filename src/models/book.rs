//! Book model and request payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier (>= 1)
    #[schema(example = 1)]
    pub id: i64,
    /// Title
    #[serde(rename = "nom")]
    #[schema(example = "Le Petit Prince")]
    pub name: String,
    #[serde(rename = "auteur")]
    #[schema(example = "Antoine de Saint-Exupéry")]
    pub author: String,
    #[serde(rename = "editeur")]
    #[schema(example = "Gallimard")]
    pub publisher: String,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewBook {
    /// Identifier chosen by the client; never generated server side
    #[validate(range(min = 1, message = "L'ID du livre doit être supérieur ou égal à 1."))]
    pub id: i64,
    #[serde(rename = "nom")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(rename = "auteur")]
    #[validate(custom(function = "not_blank"))]
    pub author: String,
    #[serde(rename = "editeur")]
    #[validate(custom(function = "not_blank"))]
    pub publisher: String,
}

/// Update book request.
///
/// `id` is accepted for compatibility with clients sending a full book, but
/// the identifier from the URL always wins.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookUpdate {
    pub id: Option<i64>,
    #[serde(rename = "nom")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(rename = "auteur")]
    #[validate(custom(function = "not_blank"))]
    pub author: String,
    #[serde(rename = "editeur")]
    #[validate(custom(function = "not_blank"))]
    pub publisher: String,
}

/// Entry of the seed dataset (no identifier)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedBook {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "auteur")]
    pub author: String,
    #[serde(rename = "editeur")]
    pub publisher: String,
}

/// Number of stored books
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookTotal {
    pub total: usize,
}

impl From<NewBook> for Book {
    fn from(data: NewBook) -> Self {
        Self {
            id: data.id,
            name: data.name,
            author: data.author,
            publisher: data.publisher,
        }
    }
}

impl BookUpdate {
    /// Build the replacement record; `fallback_id` is used when the payload carries none
    pub fn into_book(self, fallback_id: i64) -> Book {
        Book {
            id: self.id.unwrap_or(fallback_id),
            name: self.name,
            author: self.author,
            publisher: self.publisher,
        }
    }
}

impl SeedBook {
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            name: self.name,
            author: self.author,
            publisher: self.publisher,
        }
    }
}

/// A text field is valid when something other than whitespace remains
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
