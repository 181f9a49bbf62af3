//! Validation system for configuration values
//!
//! Each config section implements the `ConfigSection` trait which includes validation.

pub use crate::error::ValidationError;
use std::collections::HashSet;

/// Trait for configuration sections that can validate themselves
///
/// Each config section (AppConfig, CatalogConfig) implements this trait
/// so new sections can be added without touching the loader.
pub trait ConfigSection: Default {
    /// Validates the configuration section
    ///
    /// Returns a list of validation errors. Empty list means valid.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// Common validators for config values
pub struct Validator;

impl Validator {
    /// Validates that a string is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that a list has at least one entry
    pub fn non_empty_list<T>(values: &[T], field: &str) -> Result<(), ValidationError> {
        if values.is_empty() {
            Err(ValidationError::new(field, "must contain at least one entry"))
        } else {
            Ok(())
        }
    }

    /// Validates that every entry of `values` also appears in `allowed`
    ///
    /// Reports each stray entry with its index.
    pub fn subset_of(
        values: &[String],
        allowed: &[String],
        field: &str,
    ) -> Vec<Result<(), ValidationError>> {
        values
            .iter()
            .enumerate()
            .filter(|(_, value)| !allowed.contains(value))
            .map(|(i, value)| {
                Err(ValidationError::with_value(
                    format!("{}[{}]", field, i),
                    format!("must be one of: {}", allowed.join(", ")),
                    value,
                ))
            })
            .collect()
    }

    /// Validates that no entry of a list appears twice
    ///
    /// Reports every repeated occurrence with its index.
    pub fn unique(values: &[String], field: &str) -> Vec<Result<(), ValidationError>> {
        let mut seen = HashSet::new();
        values
            .iter()
            .enumerate()
            .filter(|&(_, value)| !seen.insert(value.as_str()))
            .map(|(i, value)| {
                Err(ValidationError::with_value(
                    format!("{}[{}]", field, i),
                    "is listed more than once",
                    value,
                ))
            })
            .collect()
    }

    /// Collects multiple validation results into a single result
    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(|r| r.err()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
