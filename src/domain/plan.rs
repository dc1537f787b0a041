use clap::ValueEnum;
use serde::Deserialize;

/// Time available for the visit, which bounds how many stops make the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeBudget {
    HalfDay,
    OneDay,
}

impl TimeBudget {
    /// Maximum number of stops that fit the budget
    pub fn max_stops(&self) -> usize {
        match self {
            TimeBudget::HalfDay => 4,
            TimeBudget::OneDay => 6,
        }
    }
}

/// One stop in a generated travel plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub name: String,
    /// Distance from the origin in kilometers, rounded to 2 decimal places
    pub distance_km: f64,
}
