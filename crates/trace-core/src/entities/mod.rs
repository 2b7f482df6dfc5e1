//! Entity structs for Harvest Trace domain objects.

mod event;
mod harvest;
mod produce;
mod verdict;

pub use event::SupplyChainEvent;
pub use harvest::HarvestRecord;
pub use produce::Produce;
pub use verdict::ValidationVerdict;
