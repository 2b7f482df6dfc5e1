//! # trace-config
//!
//! Layered configuration loading for Harvest Trace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HARVEST_*` prefix, `__` as separator)
//! 2. Project-level `.harvest/config.toml`
//! 3. User-level `~/.config/harvest/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HARVEST_VALIDATOR__API_KEY` -> `validator.api_key`,
//! `HARVEST_GENERAL__SIMULATED_LATENCY_MS` -> `general.simulated_latency_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use trace_config::HarvestConfig;
//!
//! let config = HarvestConfig::load_with_dotenv().expect("config");
//!
//! if config.validator.is_configured() {
//!     println!("Validating with model {}", config.validator.model);
//! }
//! ```

mod error;
mod general;
mod validator;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use validator::ValidatorConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "HARVEST_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".harvest/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HarvestConfig {
    #[serde(default)]
    pub validator: ValidatorConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HarvestConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section for values that cannot work.
    ///
    /// An unconfigured validator is fine here; callers fall back to the
    /// offline rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validator.validate()?;
        if self.general.currency.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.currency".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("harvest").join("config.toml"))
    }
}
