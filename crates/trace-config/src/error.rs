//! Configuration error types.
//!
//! Raised while reading `.harvest/config.toml`, the user config file and
//! `HARVEST_*` variables, or when a `[validator]` / `[general]` value cannot
//! work.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("failed to load harvest configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The section lacks the fields needed to use it, e.g. `[validator]`
    /// without `api_key`.
    #[error("[{section}] is not configured; set it in .harvest/config.toml or HARVEST_{env}__* variables", env = .section.to_ascii_uppercase())]
    NotConfigured { section: String },

    /// A value is present but unusable, e.g. `general.currency = ""`.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
