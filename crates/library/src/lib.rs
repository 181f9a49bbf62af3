//! Bookshelf Library Management
//!
//! In-memory book catalog: registers books, assigns each a genre from a
//! fixed vocabulary and keeps a favorites list.
//!
//! ```rust
//! use bookshelf_library::Catalog;
//!
//! let mut catalog = Catalog::default();
//! catalog.register_book("Гордость и предубеждение и зомби");
//! catalog.assign_genre("Гордость и предубеждение и зомби", "Ужасы");
//!
//! assert_eq!(catalog.get_genre("Гордость и предубеждение и зомби"), Some("Ужасы"));
//! assert_eq!(catalog.get_genre("Unknown"), None);
//! assert!(catalog.list_children_safe_books().is_empty());
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, CatalogStats};
pub use error::{LibraryError, LibraryResult};
