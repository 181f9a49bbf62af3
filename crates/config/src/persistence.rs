//! Reading and writing `config.toml`
//!
//! Writes go to a staging file in the target directory which is then
//! renamed over the old file, so a crash never leaves half a config
//! behind. The previous file is copied to `config.toml.backup` first.

use crate::error::join_errors;
use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DEFAULT_FILE_HEADER: &str = "\
# Bookshelf configuration
#
# [app]
#   log_level              error, warn, info, debug or trace
#
# [catalog]
#   genres                 every genre a book may be assigned (at least one)
#   age_restricted_genres  genres hidden from the children-safe list;
#                          each one must also appear in `genres`
#
# Environment overrides (comma-separated lists):
#   BOOKSHELF_CATALOG_GENRES
#   BOOKSHELF_CATALOG_AGE_RESTRICTED_GENRES
#   BOOKSHELF_APP_LOG_LEVEL

";

/// Owns the location of one config file
pub struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Reads the file, or returns defaults if there is none yet
    ///
    /// Blank files, TOML errors and files from a newer format version are
    /// errors. Settings that fail validation are only logged, so a
    /// hand-edited file can still be loaded and fixed.
    pub fn load(&self) -> ConfigResult<Config> {
        let Some(contents) = self.read_contents()? else {
            log::info!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        };

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                path: self.config_path.clone(),
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }

        if let Err(errors) = config.validate() {
            log::warn!(
                "{} has invalid settings: {}",
                self.config_path.display(),
                join_errors(&errors)
            );
        }

        Ok(config)
    }

    /// Validates `config` and writes it in place of the current file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        let body = Self::encode(config)?;
        self.replace_file(&body)?;

        log::info!("Config saved to {}", self.config_path.display());
        Ok(())
    }

    /// Writes the default config preceded by a comment block describing
    /// every setting
    pub fn generate_default_with_comments(&self) -> ConfigResult<()> {
        let body = Self::encode(&Config::default())?;
        self.replace_file(&format!("{}{}", DEFAULT_FILE_HEADER, body))?;

        log::info!("Generated default config at {}", self.config_path.display());
        Ok(())
    }

    fn read_contents(&self) -> ConfigResult<Option<String>> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Err(ConfigError::EmptyFile {
                path: self.config_path.clone(),
            });
        }

        Ok(Some(contents))
    }

    fn encode(config: &Config) -> ConfigResult<String> {
        config
            .validate()
            .map_err(|errors| ConfigError::Invalid(join_errors(&errors)))?;

        Ok(toml::to_string_pretty(config)?)
    }

    fn replace_file(&self, content: &str) -> ConfigResult<()> {
        let dir = self.config_path.parent().ok_or_else(|| ConfigError::NoConfigDir {
            reason: format!("{} has no parent directory", self.config_path.display()),
        })?;

        create_dir(dir)?;

        if self.config_path.exists() {
            self.backup()?;
        }

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| ConfigError::Stage {
            dir: dir.to_path_buf(),
            source,
        })?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.flush())
            .map_err(|source| ConfigError::Stage {
                dir: dir.to_path_buf(),
                source,
            })?;

        staged
            .persist(&self.config_path)
            .map_err(|e| ConfigError::Write {
                path: self.config_path.clone(),
                source: e.error,
            })?;

        Ok(())
    }

    fn backup(&self) -> ConfigResult<()> {
        let backup_path = self.config_path.with_extension("toml.backup");
        fs::copy(&self.config_path, &backup_path).map_err(|source| ConfigError::Backup {
            path: self.config_path.clone(),
            source,
        })?;
        log::debug!("Previous config kept at {}", backup_path.display());
        Ok(())
    }
}

fn create_dir(path: &Path) -> ConfigResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| ConfigError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Created config directory {}", path.display());
    }
    Ok(())
}
