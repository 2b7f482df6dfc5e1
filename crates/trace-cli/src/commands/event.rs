use trace_intake::{EventForm, record_event, simulate_scan};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EventArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `harvest event`: scan, then log a distributor or retailer step.
pub async fn handle(args: &EventArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Scanning product code...");
    let produce_id = simulate_scan(ctx.scan_latency(), args.produce_id.as_deref()).await;
    progress.finish_clear();

    let form = EventForm {
        role: args.role.into(),
        location: args.location.clone(),
        status: args.status.clone(),
        price: args.price.clone(),
    };

    let progress = Progress::spinner("Recording handling event...");
    let response = record_event(
        &produce_id,
        &form,
        &ctx.config.general.currency,
        ctx.record_latency(),
    )
    .await?;
    progress.finish_ok(&response.message);

    output(&response, flags.format)
}
