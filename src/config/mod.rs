//! Configuration module for shelfr
//!
//! Manages the location of the e-book library and how it is scanned.
//! Configuration is stored in the user's config directory
//! (`~/.config/shelfr/config.toml` on Linux) and can be overridden with
//! `SHELFR_*` environment variables (`SHELFR_EBOOK_DIR=/mnt/books`).
//!
//! The loaded value is handed to the index builder explicitly; nothing here
//! is global.

mod setup;

pub use setup::first_time_setup;

use crate::tags::DEFAULT_ATTRIBUTE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default e-book extension
pub const DEFAULT_EXTENSION: &str = ".epub";

/// Default number of title rows shown by the picker
pub const DEFAULT_LIST_HEIGHT: usize = 10;

fn default_ebook_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join("Downloads")
        .join("Ebooks")
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

const fn default_list_height() -> usize {
    DEFAULT_LIST_HEIGHT
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShelfrConfig {
    /// Root of the e-book library; a leading `~/` is expanded
    #[serde(default = "default_ebook_dir")]
    pub ebook_dir: PathBuf,

    /// File name suffix that marks a book, leading dot included
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Extended attribute holding the comma-separated tag list
    #[serde(default = "default_attribute")]
    pub attribute: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Number of title rows shown by the picker
    #[serde(default = "default_list_height")]
    pub list_height: usize,
}

impl Default for ShelfrConfig {
    fn default() -> Self {
        Self {
            ebook_dir: default_ebook_dir(),
            extension: default_extension(),
            attribute: default_attribute(),
            quiet: false,
            list_height: DEFAULT_LIST_HEIGHT,
        }
    }
}

impl ShelfrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("shelfr").join("config.toml"))
    }

    /// Load configuration from `path`, layered with `SHELFR_*` variables
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment value cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("SHELFR").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Change the library directory and save
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn set_ebook_dir(&mut self, dir: PathBuf) -> Result<(), ConfigError> {
        self.ebook_dir = dir;
        self.save()
    }

    /// Library directory with a leading `~` expanded to the home directory
    #[must_use]
    pub fn resolved_ebook_dir(&self) -> PathBuf {
        expand_home(&self.ebook_dir)
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}
