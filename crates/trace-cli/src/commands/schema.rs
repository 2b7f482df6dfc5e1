use anyhow::Context;
use trace_validator::schema::verdict_schema;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `harvest schema`. Needs no configuration.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = verdict_schema().context("failed to build the verdict schema")?;
    output(&schema, flags.format)
}
