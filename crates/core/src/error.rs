//! Error types for the Bookshelf domain model
//!
//! The catalog itself never fails: invalid input is rejected silently.
//! These errors only surface when a genre vocabulary is built from
//! untrusted input (configuration files, environment overrides).

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The vocabulary has no genres at all
    #[error("Genre vocabulary must contain at least one genre")]
    EmptyVocabulary,

    /// A genre name was empty or whitespace only
    #[error("Genre at position {index} is empty")]
    EmptyGenre { index: usize },

    /// The same genre appears more than once in the vocabulary
    #[error("Duplicate genre in vocabulary: {genre}")]
    DuplicateGenre { genre: String },

    /// An age-restricted genre is not part of the vocabulary
    #[error("Age-restricted genre '{genre}' is not in the vocabulary")]
    UnknownRestrictedGenre { genre: String },

    /// The same genre is listed as age-restricted more than once
    #[error("Duplicate age-restricted genre: {genre}")]
    DuplicateRestrictedGenre { genre: String },
}

/// Convenience result type for domain construction
pub type CoreResult<T> = std::result::Result<T, CoreError>;
