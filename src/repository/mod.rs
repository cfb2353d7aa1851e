//! Repository layer: in-memory storage and its seed loader

pub mod books;
pub mod seed;

pub use books::{BookStore, StoreError};
pub use seed::{load_seed_file, SeedError};

/// Main repository struct holding the stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: BookStore,
}

impl Repository {
    pub fn new(books: BookStore) -> Self {
        Self { books }
    }
}
