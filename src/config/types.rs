use crate::revenue::{MonthlyScenario, PricingTable};
use serde::{Deserialize, Serialize};

/// Price list, exchange rate and projection scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Year printed in the projection header
    pub year: i32,
    /// Local currency units per foreign currency unit
    pub exchange_rate: f64,
    pub tiers: PricingTable,
    pub scenarios: Vec<MonthlyScenario>,
}
