//! # mite-config
//!
//! Layered configuration loading for the MITE translator using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MITE_*` prefix, `__` as separator)
//! 2. Project-level `.mite/config.toml`
//! 3. User-level `~/.config/mite/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MITE_OUTPUT__FORMAT` -> `output.format`,
//! `MITE_SCHEMA__PATH` -> `schema.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mite_config::MiteConfig;
//!
//! let config = MiteConfig::load_with_dotenv().expect("config");
//! println!("reading {} documents", config.input.format);
//! ```

mod error;
mod input;
mod output;
mod schema;
mod submission;

pub use error::ConfigError;
pub use input::{InputConfig, InputFormat};
pub use output::{OutputConfig, OutputFormat};
pub use schema::SchemaConfig;
pub use submission::SubmissionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MiteConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl MiteConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`MiteConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// `ConfigError::Figment` if a source cannot be parsed or a value has the
    /// wrong type, `ConfigError::InvalidValue` for unknown vocabulary labels.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`MiteConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and check a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// See [`MiteConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.submission.status()?;
        config.submission.quality()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".mite/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MITE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mite").join("config.toml"))
    }
}
