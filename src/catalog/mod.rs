mod error;
mod selection;
mod snapshot;
mod summary;
mod types;

pub use error::CatalogError;
pub use selection::Selection;
pub use snapshot::CatalogSnapshot;
pub use summary::{conjunctions_for, sort_by_risk, FleetOverview, RiskSummary};
pub use types::{ConjunctionEvent, ObjectStatus, RiskLevel, TrackedObject};

#[cfg(test)]
pub(crate) use summary::fixtures;
