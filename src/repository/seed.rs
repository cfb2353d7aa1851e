//! Seed dataset loading

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{book::is_blank, Book, SeedBook};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Entry at `index` (0-based) has a blank name, author or publisher
    #[error("invalid seed file {path}: entry {index} has a blank nom, auteur or editeur")]
    Invalid { path: PathBuf, index: usize },
}

/// Read the JSON array of books stored at `path`
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<SeedBook>, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<SeedBook> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(index) = entries.iter().position(has_blank_field) {
        return Err(SeedError::Invalid {
            path: path.to_path_buf(),
            index,
        });
    }

    Ok(entries)
}

fn has_blank_field(entry: &SeedBook) -> bool {
    is_blank(&entry.name) || is_blank(&entry.author) || is_blank(&entry.publisher)
}

/// Number the seed entries 1..=N following their position in the dataset
pub fn assign_identifiers(entries: Vec<SeedBook>) -> Vec<Book> {
    entries
        .into_iter()
        .zip(1..)
        .map(|(entry, id)| entry.with_id(id))
        .collect()
}
