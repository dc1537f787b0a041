pub mod coordinate;
pub mod feature;
pub mod plan;
pub mod service;

pub use coordinate::Coordinate;
pub use feature::{MapFeature, UNNAMED_PLACE};
pub use plan::{PlanEntry, TimeBudget};
pub use service::{ServiceCategory, ServiceTally};
