use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Submit(args) => commands::submit::handle(&args, ctx, flags).await,
        Commands::Event(args) => commands::event::handle(&args, ctx, flags).await,
        Commands::Scan(args) => commands::scan::handle(&args, ctx, flags).await,
        Commands::Trace(args) => commands::trace::handle(&args, ctx, flags),
        Commands::Schema => unreachable!("schema is pre-dispatched in main"),
    }
}
