use trace_intake::simulate_scan;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::commands::trace::show_trace;
use crate::context::AppContext;
use crate::progress::Progress;

/// Handle `harvest scan`: the consumer view.
pub async fn handle(args: &ScanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Scanning product code...");
    let produce_id = simulate_scan(ctx.scan_latency(), args.produce_id.as_deref()).await;
    progress.finish_clear();

    show_trace(&produce_id, flags)
}
