// FILE: crates/library/src/catalog.rs

use crate::error::{LibraryError, Result};
use bookshelf_config::{CatalogConfig, ConfigManager};
use bookshelf_core::{validate_book_name, GenreVocabulary};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;

/// In-memory book catalog
///
/// Every book has exactly one genre slot. An empty string means the book
/// is registered but has no genre yet; a book that was never registered
/// has no slot at all. Books are never removed once registered.
///
/// The plain mutating operations never fail: invalid input leaves the
/// catalog unchanged. The `try_*` variants apply the same rules and report
/// why an input was refused.
#[derive(Debug, Clone)]
pub struct Catalog {
    vocabulary: GenreVocabulary,
    books: BTreeMap<String, String>,
    favorites: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog over a fixed genre vocabulary
    pub fn new(vocabulary: GenreVocabulary) -> Self {
        info!(
            "Creating catalog with {} genres ({} age-restricted)",
            vocabulary.len(),
            vocabulary.age_restricted().len()
        );

        Self {
            vocabulary,
            books: BTreeMap::new(),
            favorites: Vec::new(),
        }
    }

    /// Creates an empty catalog from the `[catalog]` config section
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Ok(Self::new(config.to_vocabulary()?))
    }

    /// Creates an empty catalog from the managed config file, with
    /// environment overrides applied
    pub fn from_manager(manager: &ConfigManager) -> Result<Self> {
        Ok(Self::new(manager.load_vocabulary()?))
    }

    /// The genre vocabulary this catalog was created with
    pub fn vocabulary(&self) -> &GenreVocabulary {
        &self.vocabulary
    }

    /// Registers a book with no genre
    ///
    /// Ignored if the name is empty, longer than 40 characters, or
    /// already registered.
    pub fn register_book(&mut self, name: &str) {
        if let Err(e) = self.try_register_book(name) {
            debug!("Ignoring registration of '{}': {}", name, e);
        }
    }

    /// Registers a book with no genre, reporting why a name was refused
    pub fn try_register_book(&mut self, name: &str) -> Result<()> {
        validate_book_name(name)?;

        if self.books.contains_key(name) {
            return Err(LibraryError::DuplicateBook(name.to_string()));
        }

        self.books.insert(name.to_string(), String::new());
        debug!("Registered book '{}'", name);
        Ok(())
    }

    /// Sets the genre of a registered book
    ///
    /// A genre outside the vocabulary clears the book's genre instead.
    /// Unknown books are ignored.
    pub fn assign_genre(&mut self, name: &str, genre: &str) {
        if let Err(e) = self.try_assign_genre(name, genre) {
            debug!("Ignoring genre assignment for '{}': {}", name, e);
        }
    }

    /// Sets the genre of a registered book, failing if the book is unknown
    ///
    /// An unknown genre is not an error: the book becomes unassigned.
    pub fn try_assign_genre(&mut self, name: &str, genre: &str) -> Result<()> {
        let known_genre = self.vocabulary.contains(genre);
        let slot = self
            .books
            .get_mut(name)
            .ok_or_else(|| LibraryError::BookNotFound(name.to_string()))?;

        slot.clear();
        if known_genre {
            slot.push_str(genre);
            debug!("Assigned genre '{}' to '{}'", genre, name);
        } else {
            debug!("Unknown genre '{}', cleared genre of '{}'", genre, name);
        }
        Ok(())
    }

    /// Returns the genre of a book
    ///
    /// `Some("")` for a registered book without a genre, `None` for a book
    /// that was never registered.
    pub fn get_genre(&self, name: &str) -> Option<&str> {
        self.books.get(name).map(String::as_str)
    }

    /// Names of all books currently assigned exactly `genre`
    pub fn list_books_by_genre(&self, genre: &str) -> Vec<&str> {
        if !self.vocabulary.contains(genre) {
            return Vec::new();
        }

        self.books
            .iter()
            .filter(|(_, assigned)| assigned.as_str() == genre)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// The full book-to-genre mapping, ordered by name
    pub fn list_all_books(&self) -> &BTreeMap<String, String> {
        &self.books
    }

    /// Books with a genre that is not age-restricted
    ///
    /// Books without a genre are never listed.
    pub fn list_children_safe_books(&self) -> Vec<&str> {
        self.books
            .iter()
            .filter(|(_, genre)| self.vocabulary.is_children_safe(genre))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Registered books that have no genre
    pub fn list_unassigned_books(&self) -> Vec<&str> {
        self.books
            .iter()
            .filter(|(_, genre)| genre.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Adds a registered book to favorites
    ///
    /// Unknown books and books already in favorites are ignored.
    pub fn add_favorite(&mut self, name: &str) {
        if let Err(e) = self.try_add_favorite(name) {
            debug!("Ignoring favorite '{}': {}", name, e);
        }
    }

    /// Adds a registered book to favorites
    ///
    /// Returns `Ok(false)` if the book was already a favorite.
    pub fn try_add_favorite(&mut self, name: &str) -> Result<bool> {
        if !self.books.contains_key(name) {
            return Err(LibraryError::BookNotFound(name.to_string()));
        }

        if self.is_favorite(name) {
            return Ok(false);
        }

        self.favorites.push(name.to_string());
        debug!("Added '{}' to favorites", name);
        Ok(true)
    }

    /// Removes a book from favorites if present
    pub fn remove_favorite(&mut self, name: &str) {
        if let Some(index) = self.favorites.iter().position(|f| f == name) {
            self.favorites.remove(index);
            debug!("Removed '{}' from favorites", name);
        }
    }

    /// Favorites in the order they were added
    pub fn list_favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Returns true if `name` is in favorites
    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|f| f == name)
    }

    /// Returns true if `name` is a registered book
    pub fn contains_book(&self, name: &str) -> bool {
        self.books.contains_key(name)
    }

    /// Number of registered books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if no book is registered
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Summary counts over the whole catalog
    pub fn stats(&self) -> CatalogStats {
        let books_per_genre = self
            .vocabulary
            .genres()
            .iter()
            .map(|genre| {
                let count = self.books.values().filter(|g| *g == genre).count();
                (genre.clone(), count)
            })
            .collect();

        CatalogStats {
            total_books: self.books.len(),
            unassigned_books: self.books.values().filter(|g| g.is_empty()).count(),
            favorite_count: self.favorites.len(),
            children_safe_books: self
                .books
                .values()
                .filter(|g| self.vocabulary.is_children_safe(g))
                .count(),
            books_per_genre,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(GenreVocabulary::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_books: usize,
    pub unassigned_books: usize,
    pub favorite_count: usize,
    pub children_safe_books: usize,
    /// Count per genre, in vocabulary order
    pub books_per_genre: Vec<(String, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::NameViolation;

    fn sample_catalog() -> Catalog {
        let vocabulary = GenreVocabulary::new(["Sci-Fi", "Horror", "Cartoons"], ["Horror"])
            .expect("valid vocabulary");
        Catalog::new(vocabulary)
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.list_favorites().is_empty());
        assert_eq!(catalog.vocabulary().len(), 5);
    }

    #[test]
    fn test_register_starts_unassigned() {
        let mut catalog = sample_catalog();
        catalog.register_book("Dune");

        assert!(catalog.contains_book("Dune"));
        assert_eq!(catalog.get_genre("Dune"), Some(""));
        assert_eq!(catalog.list_unassigned_books(), vec!["Dune"]);
    }

    #[test]
    fn test_try_register_reports_reason() {
        let mut catalog = sample_catalog();

        assert!(matches!(
            catalog.try_register_book(""),
            Err(LibraryError::InvalidName(NameViolation::Empty))
        ));
        assert!(matches!(
            catalog.try_register_book(&"x".repeat(41)),
            Err(LibraryError::InvalidName(NameViolation::TooLong { length: 41, .. }))
        ));

        catalog.try_register_book("Dune").unwrap();
        assert!(matches!(
            catalog.try_register_book("Dune"),
            Err(LibraryError::DuplicateBook(name)) if name == "Dune"
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_keeps_genre() {
        let mut catalog = sample_catalog();
        catalog.register_book("Dune");
        catalog.assign_genre("Dune", "Sci-Fi");
        catalog.register_book("Dune");

        assert_eq!(catalog.get_genre("Dune"), Some("Sci-Fi"));
    }

    #[test]
    fn test_assign_to_unknown_book_is_ignored() {
        let mut catalog = sample_catalog();
        catalog.assign_genre("Dune", "Sci-Fi");

        assert!(catalog.is_empty());
        assert_eq!(catalog.get_genre("Dune"), None);
        assert!(matches!(
            catalog.try_assign_genre("Dune", "Sci-Fi"),
            Err(LibraryError::BookNotFound(_))
        ));
    }

    #[test]
    fn test_genre_state_transitions() {
        let mut catalog = sample_catalog();
        catalog.register_book("Dune");

        catalog.assign_genre("Dune", "Sci-Fi");
        assert_eq!(catalog.get_genre("Dune"), Some("Sci-Fi"));

        catalog.assign_genre("Dune", "Sci-Fi");
        assert_eq!(catalog.get_genre("Dune"), Some("Sci-Fi"));

        catalog.assign_genre("Dune", "Horror");
        assert_eq!(catalog.get_genre("Dune"), Some("Horror"));

        catalog.try_assign_genre("Dune", "Poetry").unwrap();
        assert_eq!(catalog.get_genre("Dune"), Some(""));
    }

    #[test]
    fn test_genre_match_is_case_sensitive() {
        let mut catalog = sample_catalog();
        catalog.register_book("Dune");
        catalog.assign_genre("Dune", "sci-fi");

        assert_eq!(catalog.get_genre("Dune"), Some(""));
        assert!(catalog.list_books_by_genre("sci-fi").is_empty());
    }

    #[test]
    fn test_list_books_by_genre() {
        let mut catalog = sample_catalog();
        for (name, genre) in [("Dune", "Sci-Fi"), ("It", "Horror"), ("Solaris", "Sci-Fi")] {
            catalog.register_book(name);
            catalog.assign_genre(name, genre);
        }
        catalog.register_book("Untitled");

        assert_eq!(catalog.list_books_by_genre("Sci-Fi"), vec!["Dune", "Solaris"]);
        assert_eq!(catalog.list_books_by_genre("Horror"), vec!["It"]);
        assert!(catalog.list_books_by_genre("Cartoons").is_empty());
        assert!(catalog.list_books_by_genre("").is_empty());
    }

    #[test]
    fn test_children_safe_excludes_unassigned_and_restricted() {
        let mut catalog = sample_catalog();
        for (name, genre) in [("Dune", "Sci-Fi"), ("It", "Horror"), ("Shrek", "Cartoons")] {
            catalog.register_book(name);
            catalog.assign_genre(name, genre);
        }
        catalog.register_book("Untitled");

        assert_eq!(catalog.list_children_safe_books(), vec!["Dune", "Shrek"]);
    }

    #[test]
    fn test_favorites() {
        let mut catalog = sample_catalog();
        catalog.register_book("Dune");
        catalog.register_book("It");

        assert!(catalog.try_add_favorite("It").unwrap());
        assert!(!catalog.try_add_favorite("It").unwrap());
        catalog.add_favorite("Dune");
        catalog.add_favorite("Solaris");

        assert_eq!(catalog.list_favorites(), ["It", "Dune"]);
        assert!(catalog.is_favorite("Dune"));
        assert!(!catalog.is_favorite("Solaris"));

        catalog.remove_favorite("It");
        catalog.remove_favorite("It");
        assert_eq!(catalog.list_favorites(), ["Dune"]);
    }

    #[test]
    fn test_favorites_survive_genre_changes() {
        let mut catalog = sample_catalog();
        catalog.register_book("Dune");
        catalog.add_favorite("Dune");
        catalog.assign_genre("Dune", "Sci-Fi");
        catalog.assign_genre("Dune", "Poetry");

        assert!(catalog.is_favorite("Dune"));
    }

    #[test]
    fn test_stats() {
        let mut catalog = sample_catalog();
        for (name, genre) in [("Dune", "Sci-Fi"), ("It", "Horror"), ("Solaris", "Sci-Fi")] {
            catalog.register_book(name);
            catalog.assign_genre(name, genre);
        }
        catalog.register_book("Untitled");
        catalog.add_favorite("It");

        let stats = catalog.stats();
        assert_eq!(stats.total_books, 4);
        assert_eq!(stats.unassigned_books, 1);
        assert_eq!(stats.favorite_count, 1);
        assert_eq!(stats.children_safe_books, 2);
        assert_eq!(
            stats.books_per_genre,
            vec![
                ("Sci-Fi".to_string(), 2),
                ("Horror".to_string(), 1),
                ("Cartoons".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_stats_empty() {
        let stats = Catalog::default().stats();
        assert_eq!(stats.total_books, 0);
        assert_eq!(stats.unassigned_books, 0);
        assert_eq!(stats.favorite_count, 0);
        assert_eq!(stats.children_safe_books, 0);
        assert!(stats.books_per_genre.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_from_config() {
        let catalog = Catalog::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.vocabulary(), &GenreVocabulary::default());

        let bad = CatalogConfig {
            genres: vec!["Sci-Fi".to_string()],
            age_restricted_genres: vec!["Horror".to_string()],
        };
        assert!(matches!(
            Catalog::from_config(&bad),
            Err(LibraryError::Vocabulary(_))
        ));
    }
}
