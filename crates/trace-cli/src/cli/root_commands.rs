use clap::{Args, Subcommand, ValueEnum};
use trace_core::enums::StakeholderRole;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log a new harvest batch (farmer).
    Submit(SubmitArgs),
    /// Scan a product and log a handling event (distributor/retailer).
    Event(EventArgs),
    /// Scan a product's code and show its history (consumer).
    Scan(ScanArgs),
    /// Show the trace page for a produce id.
    Trace(TraceArgs),
    /// Print the JSON Schema of the validation verdict.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Name of the crop, e.g. "Organic Honeycrisp Apples".
    #[arg(long)]
    pub crop_name: String,
    /// Harvest date; normalized to YYYY-MM-DD.
    #[arg(long)]
    pub harvest_date: String,
    /// Quality metrics, comma separated (weight, size, color, ...).
    #[arg(long)]
    pub quality_metrics: String,
}

/// Roles that log handling events.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum HandlerRole {
    Distributor,
    Retailer,
}

impl From<HandlerRole> for StakeholderRole {
    fn from(role: HandlerRole) -> Self {
        match role {
            HandlerRole::Distributor => Self::Distributor,
            HandlerRole::Retailer => Self::Retailer,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct EventArgs {
    #[arg(long, value_enum)]
    pub role: HandlerRole,
    /// Current location of the batch.
    #[arg(long)]
    pub location: String,
    /// Status update, e.g. "In Transit" or "On Display".
    #[arg(long)]
    pub status: String,
    /// Transaction price in the configured currency.
    #[arg(long)]
    pub price: Option<String>,
    /// Produce id; defaults to whatever the scan resolves to.
    #[arg(long)]
    pub produce_id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Produce id to pretend the code contained.
    #[arg(long)]
    pub produce_id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TraceArgs {
    /// Produce id from the code or URL.
    pub id: String,
}
