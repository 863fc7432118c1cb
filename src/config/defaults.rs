use super::types::Config;
use crate::revenue::pricing::EXCHANGE_RATE;
use crate::revenue::scenarios::{standard_scenarios, PROJECTION_YEAR};
use crate::revenue::PricingTable;

impl Default for Config {
    fn default() -> Self {
        Config {
            year: PROJECTION_YEAR,
            exchange_rate: EXCHANGE_RATE,
            tiers: PricingTable::standard(),
            scenarios: standard_scenarios(),
        }
    }
}
