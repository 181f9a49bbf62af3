//! Genre vocabulary and age-rating classification

use crate::error::{CoreError, CoreResult};
use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Genres known to a catalog unless configured otherwise
pub const DEFAULT_GENRES: [&str; 5] = ["Фантастика", "Ужасы", "Детективы", "Мультфильмы", "Комедии"];

/// Default genres flagged as unsuitable for children
pub const DEFAULT_AGE_RESTRICTED_GENRES: [&str; 2] = ["Ужасы", "Детективы"];

/// Closed, ordered set of genre labels plus its age-restricted subset
///
/// Fixed at construction. The catalog only ever reads it, so a
/// vocabulary handed to a catalog stays the same for the catalog's
/// whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreVocabulary {
    genres: Vec<String>,
    age_restricted: Vec<String>,
}

impl GenreVocabulary {
    /// Builds a vocabulary, checking that it has at least one genre, that
    /// the restricted genres are a subset of `genres` and that no name is
    /// blank or repeated
    pub fn new<G, R>(genres: G, age_restricted: R) -> CoreResult<Self>
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let vocabulary = Self {
            genres: genres.into_iter().map(Into::into).collect(),
            age_restricted: age_restricted.into_iter().map(Into::into).collect(),
        };

        match vocabulary.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(vocabulary),
        }
    }

    /// All genres in declaration order
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Age-restricted genres in declaration order
    pub fn age_restricted(&self) -> &[String] {
        &self.age_restricted
    }

    /// Genres that are not age-restricted, in declaration order
    pub fn children_safe_genres(&self) -> impl Iterator<Item = &str> {
        self.genres
            .iter()
            .map(String::as_str)
            .filter(move |genre| !self.is_age_restricted(genre))
    }

    /// Returns true if `genre` is a member of the vocabulary (exact match)
    pub fn contains(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Returns true if `genre` is flagged as unsuitable for children
    pub fn is_age_restricted(&self, genre: &str) -> bool {
        self.age_restricted.iter().any(|g| g == genre)
    }

    /// Returns true if a book of this genre may be shown to children
    ///
    /// The empty (unassigned) genre and unknown genres are never safe.
    pub fn is_children_safe(&self, genre: &str) -> bool {
        self.contains(genre) && !self.is_age_restricted(genre)
    }

    /// Position of `genre` in declaration order
    pub fn position(&self, genre: &str) -> Option<usize> {
        self.genres.iter().position(|g| g == genre)
    }

    /// Number of genres
    pub fn len(&self) -> usize {
        self.genres.len()
    }

    /// Returns true if the vocabulary has no genres
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    fn violations(&self) -> Vec<CoreError> {
        let mut errors = Vec::new();

        if self.genres.is_empty() {
            errors.push(CoreError::EmptyVocabulary);
        }

        let mut seen = HashSet::new();
        for (index, genre) in self.genres.iter().enumerate() {
            if genre.trim().is_empty() {
                errors.push(CoreError::EmptyGenre { index });
            } else if !seen.insert(genre.as_str()) {
                errors.push(CoreError::DuplicateGenre {
                    genre: genre.clone(),
                });
            }
        }

        let mut seen_restricted = HashSet::new();
        for genre in &self.age_restricted {
            if !self.contains(genre) {
                errors.push(CoreError::UnknownRestrictedGenre {
                    genre: genre.clone(),
                });
            } else if !seen_restricted.insert(genre.as_str()) {
                errors.push(CoreError::DuplicateRestrictedGenre {
                    genre: genre.clone(),
                });
            }
        }

        errors
    }
}

impl Default for GenreVocabulary {
    fn default() -> Self {
        Self {
            genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            age_restricted: DEFAULT_AGE_RESTRICTED_GENRES
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }
}

impl Validator for GenreVocabulary {
    fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = self.violations().iter().map(|e| e.to_string()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
