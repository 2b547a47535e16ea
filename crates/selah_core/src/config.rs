//! Layered TOML configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`selah.toml` shipped with the library)
//! 2. User config in the home directory (`~/.config/selah/selah.toml`)
//! 3. User config in the current directory (`./selah.toml`)

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use selah_error::{ConfigError, ConfigErrorKind, SelahResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../selah.toml");

/// Generation service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiConfig {
    /// REST API root, without a trailing slash
    base_url: String,
    /// Model used for full script generation
    script_model: String,
    /// Model used for color tone recommendations
    tone_model: String,
    /// Per-request timeout
    timeout_secs: u64,
}

/// History persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct HistoryConfig {
    /// Explicit history file; defaults to the platform data directory
    #[serde(default)]
    path: Option<PathBuf>,
}

/// Top-level Selah configuration.
///
/// # Examples
///
/// ```
/// use selah_core::SelahConfig;
///
/// let config = SelahConfig::bundled().unwrap();
/// assert_eq!(config.gemini().script_model(), "gemini-2.5-pro");
/// assert_eq!(config.gemini().tone_model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SelahConfig {
    /// Generation service settings
    gemini: GeminiConfig,
    /// History persistence settings
    #[serde(default)]
    history: HistoryConfig,
}

impl SelahConfig {
    /// Load the bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> SelahResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// Missing user files are silently skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any present file fails to parse.
    #[instrument]
    pub fn load() -> SelahResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/selah/selah.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("selah").required(false));

        Self::build(builder)
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SelahResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> SelahResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Deserialize(e.to_string())))?;
        Ok(config)
    }

    /// Where the history log lives.
    ///
    /// Uses `history.path` when set, otherwise `<data dir>/selah/history.json`,
    /// falling back to `./.selah/history.json` on platforms without a data
    /// directory.
    pub fn history_path(&self) -> PathBuf {
        if let Some(path) = self.history.path() {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("selah"))
            .unwrap_or_else(|| PathBuf::from(".selah"))
            .join("history.json")
    }
}
