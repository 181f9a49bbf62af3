// FILE: crates/library/src/error.rs

use bookshelf_config::ConfigError;
use bookshelf_core::{CoreError, NameViolation};
use thiserror::Error;

/// Reasons a strict catalog operation was refused
///
/// The plain operations (`register_book`, `assign_genre`, `add_favorite`)
/// swallow these and leave the catalog unchanged.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid book name: {0}")]
    InvalidName(#[from] NameViolation),

    #[error("Book already registered: {0}")]
    DuplicateBook(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Invalid genre vocabulary: {0}")]
    Vocabulary(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, LibraryError>;
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
