use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pass/fail result plus error list returned by a validation service.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    /// Whether the harvest data is valid.
    pub is_valid: bool,
    /// Human-readable validation errors, in the order reported.
    pub validation_errors: Vec<String>,
}

impl ValidationVerdict {
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            validation_errors: Vec::new(),
        }
    }

    #[must_use]
    pub const fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            validation_errors: errors,
        }
    }

    /// Build a verdict from collected errors: valid iff there are none.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::valid()
        } else {
            Self::invalid(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_errors_is_valid_only_when_empty() {
        assert_eq!(ValidationVerdict::from_errors(Vec::new()), ValidationVerdict::valid());
        let verdict = ValidationVerdict::from_errors(vec!["bad date".into()]);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.validation_errors, vec!["bad date".to_string()]);
    }
}
