//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult, LogLevel};
use bookshelf_core::GenreVocabulary;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Comma-separated genre list replacing `catalog.genres`
pub const ENV_CATALOG_GENRES: &str = "BOOKSHELF_CATALOG_GENRES";

/// Comma-separated genre list replacing `catalog.age_restricted_genres`
pub const ENV_CATALOG_AGE_RESTRICTED_GENRES: &str = "BOOKSHELF_CATALOG_AGE_RESTRICTED_GENRES";

/// Replaces `app.log_level`
pub const ENV_APP_LOG_LEVEL: &str = "BOOKSHELF_APP_LOG_LEVEL";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration manager
///
/// Handles file paths, defaults and validation on top of [`ConfigPersistence`].
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the platform config directory
    ///
    /// - Linux: `~/.config/bookshelf/`
    /// - macOS: `~/Library/Application Support/bookshelf/`
    /// - Windows: `%APPDATA%\bookshelf\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let persistence = ConfigPersistence::new(config_path);

        Ok(Self {
            persistence,
            config_dir,
        })
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "bookshelf")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::NoConfigDir {
                reason: "Could not determine user config directory".to_string(),
            })
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration from file
    ///
    /// A missing file yields defaults; a corrupted one is an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Loads the configuration (with environment overrides), applies the
    /// `[app]` log level and builds the genre vocabulary a catalog should
    /// be created with
    ///
    /// Fails if the genres do not form a valid vocabulary, including when
    /// no genre is configured at all.
    pub fn load_vocabulary(&self) -> ConfigResult<GenreVocabulary> {
        let config = self.load_with_env_overrides()?;
        config.app.apply_log_level();
        Ok(config.catalog.to_vocabulary()?)
    }

    /// Saves the configuration to file
    ///
    /// Invalid configurations are refused before anything is written.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Loads, applies `update_fn`, and saves the result atomically
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Generates a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.persistence.generate_default_with_comments()?;
        Ok(true)
    }

    /// Overwrites the config file with default values
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Validates the current configuration file
    ///
    /// Returns all validation messages, empty if valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;

        match config.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }

    /// Loads the config and applies `BOOKSHELF_SECTION_FIELD` overrides
    ///
    /// Genre lists are comma-separated; blank entries are dropped.
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;

        if let Ok(genres) = std::env::var(ENV_CATALOG_GENRES) {
            config.catalog.genres = parse_list(&genres);
        }

        if let Ok(restricted) = std::env::var(ENV_CATALOG_AGE_RESTRICTED_GENRES) {
            config.catalog.age_restricted_genres = parse_list(&restricted);
        }

        if let Ok(level) = std::env::var(ENV_APP_LOG_LEVEL) {
            match level.parse::<LogLevel>() {
                Ok(parsed) => config.app.log_level = parsed,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_APP_LOG_LEVEL, e),
            }
        }

        if let Err(errors) = config.validate() {
            log::warn!(
                "Config validation warnings after env overrides: {:?}",
                errors
            );
        }

        Ok(config)
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_manager() -> (TempDir, ConfigManager) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())
            .expect("Failed to create manager");
        (temp_dir, manager)
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let (_temp_dir, manager) = setup_test_manager();
        let config = manager.load_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_with_corrupted_file() {
        let (_temp_dir, manager) = setup_test_manager();
        std::fs::write(manager.config_path(), "genres = [").expect("Should write");

        let config = manager.load_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_update() {
        let (_temp_dir, manager) = setup_test_manager();
        manager.save(&Config::default()).expect("Should save");

        manager
            .update(|config| {
                config.catalog.genres.push("Поэзия".to_string());
            })
            .expect("Should update");

        let loaded = manager.load().expect("Should load");
        assert_eq!(loaded.catalog.genres.last().map(String::as_str), Some("Поэзия"));
    }

    #[test]
    fn test_initialize_creates_file() {
        let (_temp_dir, manager) = setup_test_manager();

        let created = manager.initialize().expect("Should initialize");
        assert!(created);
        assert!(manager.config_path().exists());

        let created_again = manager.initialize().expect("Should initialize");
        assert!(!created_again);
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, manager) = setup_test_manager();

        let mut config = Config::default();
        config.catalog.age_restricted_genres.clear();
        manager.save(&config).expect("Should save");

        manager.reset().expect("Should reset");

        let loaded = manager.load().expect("Should load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_validate_reports_hand_edited_errors() {
        let (_temp_dir, manager) = setup_test_manager();
        std::fs::write(
            manager.config_path(),
            "[catalog]\ngenres = [\"Sci-Fi\"]\nage_restricted_genres = [\"Horror\"]\n",
        )
        .expect("Should write");

        let errors = manager.validate().expect("Should validate");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Horror"));
    }

    #[test]
    fn test_load_vocabulary_default() {
        let (_temp_dir, manager) = setup_test_manager();
        let vocab = manager.load_vocabulary().expect("Should build vocabulary");
        assert_eq!(vocab, GenreVocabulary::default());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_config_file_path() {
        let (_temp_dir, manager) = setup_test_manager();
        assert!(manager.config_path().ends_with("config.toml"));
        assert!(manager.config_path().starts_with(manager.config_dir()));
    }
}
