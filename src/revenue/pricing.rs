use super::{PricingTable, PricingTier};

/// Local currency units per foreign currency unit
pub const EXCHANGE_RATE: f64 = 1300.0;

/// Local currency code
pub const LOCAL_CURRENCY: &str = "ARS";

/// Foreign currency code
pub const FOREIGN_CURRENCY: &str = "USD";

impl PricingTable {
    /// The standard price list
    pub fn standard() -> Self {
        Self {
            basic: PricingTier {
                name: "basic".to_string(),
                price_local: 51_000,
                price_foreign: 49.0,
                customer_limit: 3,
            },
            pro: PricingTier {
                name: "pro".to_string(),
                price_local: 103_000,
                price_foreign: 99.0,
                customer_limit: 10,
            },
            enterprise: PricingTier {
                name: "enterprise".to_string(),
                price_local: 207_000,
                price_foreign: 199.0,
                customer_limit: 999,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::Tier;

    #[test]
    fn test_standard_prices() {
        let table = PricingTable::standard();
        assert_eq!(table.get(Tier::Basic).price_local, 51_000);
        assert_eq!(table.get(Tier::Pro).price_local, 103_000);
        assert_eq!(table.get(Tier::Enterprise).price_local, 207_000);
        assert_eq!(table.get(Tier::Enterprise).customer_limit, 999);
    }

    #[test]
    fn test_iter_follows_tier_order() {
        let table = PricingTable::standard();
        let names: Vec<&str> = table.iter().map(|(_, t)| t.name.as_str()).collect();
        assert_eq!(names, vec!["basic", "pro", "enterprise"]);
    }
}
