//! Data models for Livres

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookTotal, BookUpdate, NewBook, SeedBook};
