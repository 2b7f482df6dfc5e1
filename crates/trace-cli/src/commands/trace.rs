use trace_core::catalog::{sample_produce, sample_trace};
use trace_core::responses::TraceResponse;

use crate::cli::root_commands::TraceArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, timeline};

/// Every id resolves to the sample batch; the requested id is echoed back.
#[must_use]
pub fn lookup(produce_id: &str) -> TraceResponse {
    TraceResponse {
        requested_id: produce_id.to_string(),
        produce: sample_produce(),
        events: sample_trace(),
    }
}

pub fn show_trace(produce_id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let trace = lookup(produce_id);
    tracing::debug!(requested = produce_id, resolved = %trace.produce.id, "trace lookup");

    if flags.format == OutputFormat::Table {
        timeline::print_trace(&trace);
        return Ok(());
    }
    output(&trace, flags.format)
}

/// Handle `harvest trace <id>`.
pub fn handle(args: &TraceArgs, _ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    show_trace(args.id.trim(), flags)
}

#[cfg(test)]
mod tests {
    use trace_core::catalog::SAMPLE_PRODUCE_ID;

    use super::lookup;

    #[test]
    fn any_id_resolves_to_sample_batch() {
        let trace = lookup("prod-42");
        assert_eq!(trace.requested_id, "prod-42");
        assert_eq!(trace.produce.id, SAMPLE_PRODUCE_ID);
        assert_eq!(trace.events.len(), 5);
    }
}
