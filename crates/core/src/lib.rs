//! Bookshelf domain model
//!
//! Shared types used by the configuration layer and the catalog.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use types::{
    name_length, validate_book_name, GenreVocabulary, NameViolation, Validator,
    DEFAULT_AGE_RESTRICTED_GENRES, DEFAULT_GENRES, MAX_BOOK_NAME_LEN,
};
