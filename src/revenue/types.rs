use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription tier identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Pro,
    Enterprise,
}

impl Tier {
    /// All tiers in prompt and report order
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Pro, Tier::Enterprise];

    fn index(self) -> usize {
        match self {
            Tier::Basic => 0,
            Tier::Pro => 1,
            Tier::Enterprise => 2,
        }
    }

    /// Human-readable label used in prompts
    pub fn label(self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Pro => "Pro",
            Tier::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price list entry for a single tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    /// Monthly price in local currency (whole units)
    pub price_local: u32,
    /// Informational list price in foreign currency
    pub price_foreign: f64,
    pub customer_limit: u32,
}

/// The three tiers, keyed by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub basic: PricingTier,
    pub pro: PricingTier,
    pub enterprise: PricingTier,
}

impl PricingTable {
    pub fn get(&self, tier: Tier) -> &PricingTier {
        match tier {
            Tier::Basic => &self.basic,
            Tier::Pro => &self.pro,
            Tier::Enterprise => &self.enterprise,
        }
    }

    /// Iterate tiers in prompt and report order
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &PricingTier)> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

/// Revenue contributed by one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierRevenue {
    pub tier: Tier,
    pub customer_count: i64,
    pub revenue_local: i128,
}

/// Result of a single revenue calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueResult {
    pub per_tier: [TierRevenue; 3],
    pub total_local: i128,
    pub total_foreign: f64,
    pub total_customers: i128,
    pub average_price_local: f64,
}

impl RevenueResult {
    pub fn tier(&self, tier: Tier) -> &TierRevenue {
        &self.per_tier[tier.index()]
    }

    /// Monthly local total scaled to a year
    pub fn annual_local(&self) -> i128 {
        self.total_local * 12
    }
}

/// Customer counts for one projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyScenario {
    pub label: String,
    pub basic: i64,
    pub pro: i64,
    pub enterprise: i64,
}

impl MonthlyScenario {
    pub fn new(label: impl Into<String>, basic: i64, pro: i64, enterprise: i64) -> Self {
        Self {
            label: label.into(),
            basic,
            pro,
            enterprise,
        }
    }

    pub fn count(&self, tier: Tier) -> i64 {
        match tier {
            Tier::Basic => self.basic,
            Tier::Pro => self.pro,
            Tier::Enterprise => self.enterprise,
        }
    }
}
