//! Failures of the bookshelf config layer
//!
//! I/O failures carry the path that was being touched. Bad values are
//! reported field by field through [`ValidationError`] and folded into
//! [`ConfigError::Invalid`] when they block a save.

use bookshelf_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Locating and reading the file
    #[error("No config directory available: {reason}")]
    NoConfigDir { reason: String },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but holds no settings at all
    #[error("{path} is empty; delete it or run `initialize` to regenerate it")]
    EmptyFile { path: PathBuf },

    #[error("{path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Written by a newer bookshelf than this one
    #[error("{path} has format version {found}, newest understood is {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    // Settings themselves
    #[error("Refusing invalid settings: {0}")]
    Invalid(String),

    #[error("Configured genres do not form a vocabulary: {0}")]
    InvalidVocabulary(#[from] CoreError),

    // Writing the file
    #[error("Cannot encode settings as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot back up {path}: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The staging file next to the target could not be prepared
    #[error("Cannot stage new settings in {dir}: {source}")]
    Stage {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot replace {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One rejected setting, addressed by its dotted path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// e.g. `catalog.genres[2]`
    pub field: String,
    pub message: String,
    /// Offending value, when there is a single one to show
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Self::new(field, message)
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Field '{}': {} (got: {})", self.field, self.message, value),
            None => write!(f, "Field '{}': {}", self.field, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Joins field errors into the single message carried by [`ConfigError::Invalid`]
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("catalog.genres", "must not be empty");
        assert_eq!(err.to_string(), "Field 'catalog.genres': must not be empty");
    }

    #[test]
    fn test_validation_error_with_value() {
        let err = ValidationError::with_value(
            "catalog.age_restricted_genres[0]",
            "must be one of the configured genres",
            "Poetry",
        );
        assert_eq!(
            err.to_string(),
            "Field 'catalog.age_restricted_genres[0]': must be one of the configured genres (got: Poetry)"
        );
    }

    #[test]
    fn test_join_errors() {
        let errors = vec![
            ValidationError::new("a", "bad"),
            ValidationError::with_value("b", "worse", 3),
        ];
        assert_eq!(
            join_errors(&errors),
            "Field 'a': bad; Field 'b': worse (got: 3)"
        );
    }

    #[test]
    fn test_vocabulary_error_conversion() {
        let err: ConfigError = CoreError::EmptyGenre { index: 0 }.into();
        assert!(matches!(err, ConfigError::InvalidVocabulary(_)));
        assert!(err.to_string().contains("position 0"));
    }

    #[test]
    fn test_unsupported_version_message() {
        let err = ConfigError::UnsupportedVersion {
            path: PathBuf::from("config.toml"),
            found: 7,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "config.toml has format version 7, newest understood is 1"
        );
    }
}
