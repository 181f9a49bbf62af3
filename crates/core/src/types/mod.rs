//! Domain types for Bookshelf
//!
//! - `book`: book naming rules
//! - `genre`: the genre vocabulary and its age-restricted subset
//! - `common`: shared traits

mod book;
mod common;
mod genre;

pub use book::{name_length, validate_book_name, NameViolation, MAX_BOOK_NAME_LEN};
pub use common::Validator;
pub use genre::{GenreVocabulary, DEFAULT_AGE_RESTRICTED_GENRES, DEFAULT_GENRES};
