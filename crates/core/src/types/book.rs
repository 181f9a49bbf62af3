//! Book naming rules

use thiserror::Error;

/// Longest accepted book name, counted in characters rather than bytes
pub const MAX_BOOK_NAME_LEN: usize = 40;

/// Reason a book name was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    /// The name has no characters at all
    #[error("book name is empty")]
    Empty,

    /// The name is longer than [`MAX_BOOK_NAME_LEN`]
    #[error("book name has {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

/// Returns the length of a book name as the catalog counts it
pub fn name_length(name: &str) -> usize {
    name.chars().count()
}

/// Checks that a name may be registered as a book
///
/// Whitespace is significant: `" "` is a valid one-character name.
pub fn validate_book_name(name: &str) -> Result<(), NameViolation> {
    if name.is_empty() {
        return Err(NameViolation::Empty);
    }

    let length = name_length(name);
    if length > MAX_BOOK_NAME_LEN {
        return Err(NameViolation::TooLong {
            length,
            max: MAX_BOOK_NAME_LEN,
        });
    }

    Ok(())
}
