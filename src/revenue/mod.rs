pub mod calculator;
pub mod pricing;
pub mod scenarios;
pub mod types;

pub use calculator::calculate;
pub use types::{MonthlyScenario, PricingTable, PricingTier, RevenueResult, Tier, TierRevenue};
