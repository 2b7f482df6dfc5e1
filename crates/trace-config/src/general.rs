//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_trace_base_url() -> String {
    String::from("/trace")
}

/// Default simulated scan latency.
const fn default_simulated_latency_ms() -> u64 {
    1500
}

/// Default delay before a handling event is reported as recorded.
const fn default_record_latency_ms() -> u64 {
    2000
}

fn default_currency() -> String {
    String::from("INR")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Base URL that produce ids are appended to for trace links.
    #[serde(default = "default_trace_base_url")]
    pub trace_base_url: String,

    /// Delay standing in for QR scanning.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Delay standing in for recording a handling event.
    #[serde(default = "default_record_latency_ms")]
    pub record_latency_ms: u64,

    /// Currency code attached to stakeholder transaction prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_base_url: default_trace_base_url(),
            simulated_latency_ms: default_simulated_latency_ms(),
            record_latency_ms: default_record_latency_ms(),
            currency: default_currency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.trace_base_url, "/trace");
        assert_eq!(config.simulated_latency_ms, 1500);
        assert_eq!(config.record_latency_ms, 2000);
        assert_eq!(config.currency, "INR");
    }
}
