//! # pantry-config
//!
//! Layered configuration loading for Pantry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PANTRY_*` prefix, `__` as separator)
//! 2. Project-level `.pantry/config.toml`
//! 3. User-level `~/.config/pantry/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PANTRY_VALIDATION__DENY_UNKNOWN_FIELDS` ->
//! `validation.deny_unknown_fields`, `PANTRY_VALIDATION__PHONE_MIN_DIGITS` ->
//! `validation.phone_min_digits`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pantry_config::PantryConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = PantryConfig::load_with_dotenv().expect("config");
//!
//! if config.validation.deny_unknown_fields {
//!     println!("strict field checking is on");
//! }
//! ```

mod error;
mod validation;

pub use error::ConfigError;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PantryConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl PantryConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`PantryConfig::load_with_dotenv`] if
    /// you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails, and
    /// [`ConfigError::InvalidValue`] when a value is outside its documented
    /// range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(ConfigError::from)?;
        config.validation.ensure_sane()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (or
    /// the nearest ancestor) before building the figment. This is the typical
    /// entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PantryConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".pantry/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PANTRY_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pantry").join("config.toml"))
    }
}
