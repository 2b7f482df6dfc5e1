use anyhow::Context;
use trace_config::HarvestConfig;

/// Load `.env`, layered config files and `HARVEST_*` variables, then
/// reject values that cannot work.
pub fn load_config() -> anyhow::Result<HarvestConfig> {
    let config = HarvestConfig::load_with_dotenv().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}
