//! LLM validation service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default OpenAI-compatible API base.
fn default_endpoint() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidatorConfig {
    /// Base URL of an OpenAI-compatible chat completions API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name sent with each request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer token for the API.
    #[serde(default)]
    pub api_key: String,

    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature; 0 keeps verdicts as repeatable as the model allows.
    #[serde(default)]
    pub temperature: f32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            temperature: 0.0,
        }
    }
}

impl ValidatorConfig {
    /// Check if the validator config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.endpoint.is_empty() && !self.model.is_empty()
    }

    /// Reject values that cannot produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http(s) endpoint, a
    /// zero timeout, or a temperature outside `0.0..=2.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "validator.endpoint".into(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "validator.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "validator.temperature".into(),
                reason: format!("{} is outside 0.0..=2.0", self.temperature),
            });
        }
        Ok(())
    }

    /// Like [`Self::validate`], but also requires the section to be configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the api key, endpoint or
    /// model is empty, otherwise the result of [`Self::validate`].
    pub fn require(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "validator".into(),
            });
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ValidatorConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.endpoint, "https://api.openai.com/v1");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn configured_with_api_key() {
        let config = ValidatorConfig {
            api_key: "sk-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(config.require().is_ok());
    }

    #[test]
    fn require_reports_missing_section() {
        let err = ValidatorConfig::default().require().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "validator"));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = ValidatorConfig {
            endpoint: "ftp://models.local".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "validator.endpoint"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ValidatorConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = ValidatorConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
