//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use trace_config::HarvestConfig;

#[test]
fn loads_validator_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[validator]
endpoint = "http://localhost:11434/v1"
model = "llama3.1"
api_key = "local-key"
timeout_secs = 5
temperature = 0.2
"#,
        )?;

        let config: HarvestConfig = Figment::from(Serialized::defaults(HarvestConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.validator.endpoint, "http://localhost:11434/v1");
        assert_eq!(config.validator.model, "llama3.1");
        assert_eq!(config.validator.api_key, "local-key");
        assert_eq!(config.validator.timeout_secs, 5);
        assert!((config.validator.temperature - 0.2).abs() < f32::EPSILON);
        assert!(config.validator.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
currency = "USD"
"#,
        )?;

        let config: HarvestConfig = Figment::from(Serialized::defaults(HarvestConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.currency, "USD");
        assert_eq!(config.general.trace_base_url, "/trace");
        assert_eq!(config.general.simulated_latency_ms, 1500);
        assert_eq!(config.general.record_latency_ms, 2000);
        assert_eq!(config.validator.model, "gpt-4o-mini");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".harvest"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".harvest/config.toml",
            r#"
[general]
simulated_latency_ms = 0
record_latency_ms = 250
trace_base_url = "https://trace.example.org/trace"
"#,
        )?;

        let config = HarvestConfig::load().expect("config loads");
        assert_eq!(config.general.simulated_latency_ms, 0);
        assert_eq!(config.general.record_latency_ms, 250);
        assert_eq!(
            config.general.trace_base_url,
            "https://trace.example.org/trace"
        );
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".harvest"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".harvest/config.toml",
            r#"
[validator]
timeout_secs = "soon"
"#,
        )?;

        assert!(HarvestConfig::load().is_err());
        Ok(())
    });
}
