use std::time::Duration;

use anyhow::Context;
use trace_config::HarvestConfig;
use trace_intake::SubmissionHandler;
use trace_validator::Validator;

use crate::cli::GlobalFlags;

/// Everything a command handler needs.
pub struct AppContext {
    pub config: HarvestConfig,
    pub submissions: SubmissionHandler<Validator>,
}

impl AppContext {
    pub fn init(config: HarvestConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let validator = Validator::from_config(&config.validator, flags.offline)
            .context("failed to set up the validation service")?;
        Ok(Self {
            config,
            submissions: SubmissionHandler::new(validator),
        })
    }

    /// Delay standing in for a QR scan.
    #[must_use]
    pub const fn scan_latency(&self) -> Duration {
        Duration::from_millis(self.config.general.simulated_latency_ms)
    }

    /// Delay before a handling event is reported as recorded.
    #[must_use]
    pub const fn record_latency(&self) -> Duration {
        Duration::from_millis(self.config.general.record_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use trace_config::HarvestConfig;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    #[test]
    fn scan_and_record_delays_are_independent() {
        let mut config = HarvestConfig::default();
        config.general.simulated_latency_ms = 10;
        config.general.record_latency_ms = 20;
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            offline: true,
        };

        let ctx = AppContext::init(config, &flags).expect("context should build");
        assert_eq!(ctx.scan_latency(), Duration::from_millis(10));
        assert_eq!(ctx.record_latency(), Duration::from_millis(20));
    }
}
