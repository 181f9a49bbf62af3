//! Catalog configuration section: the genre vocabulary

use crate::validation::{ConfigSection, ValidationError, Validator};
use bookshelf_core::{CoreResult, GenreVocabulary, DEFAULT_AGE_RESTRICTED_GENRES, DEFAULT_GENRES};
use serde::{Deserialize, Serialize};

/// Genres a catalog is created with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Every genre a book may be assigned, in display order
    pub genres: Vec<String>,

    /// Genres not suitable for children (must also appear in `genres`)
    pub age_restricted_genres: Vec<String>,
}

impl CatalogConfig {
    /// Builds the immutable vocabulary handed to a catalog
    pub fn to_vocabulary(&self) -> CoreResult<GenreVocabulary> {
        GenreVocabulary::new(
            self.genres.iter().cloned(),
            self.age_restricted_genres.iter().cloned(),
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            age_restricted_genres: DEFAULT_AGE_RESTRICTED_GENRES
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![Validator::non_empty_list(&self.genres, "catalog.genres")];

        for (i, genre) in self.genres.iter().enumerate() {
            results.push(Validator::not_empty(
                genre,
                &format!("catalog.genres[{}]", i),
            ));
        }
        results.extend(Validator::unique(&self.genres, "catalog.genres"));

        results.extend(Validator::subset_of(
            &self.age_restricted_genres,
            &self.genres,
            "catalog.age_restricted_genres",
        ));
        results.extend(Validator::unique(
            &self.age_restricted_genres,
            "catalog.age_restricted_genres",
        ));

        Validator::collect_errors(results)
    }
}
