use crate::revenue::{PricingTable, RevenueResult, Tier, TierRevenue};

/// Revenue for one tier: count × local price
pub fn tier_revenue(tier: Tier, customer_count: i64, pricing: &PricingTable) -> TierRevenue {
    TierRevenue {
        tier,
        customer_count,
        revenue_local: customer_count as i128 * pricing.get(tier).price_local as i128,
    }
}

/// Calculate monthly revenue for the given customer counts
///
/// Counts are taken as-is; negative values flow through the arithmetic.
/// With zero customers the average price is 0.
pub fn calculate(
    basic_count: i64,
    pro_count: i64,
    enterprise_count: i64,
    pricing: &PricingTable,
    exchange_rate: f64,
) -> RevenueResult {
    let per_tier = [
        tier_revenue(Tier::Basic, basic_count, pricing),
        tier_revenue(Tier::Pro, pro_count, pricing),
        tier_revenue(Tier::Enterprise, enterprise_count, pricing),
    ];

    let total_local: i128 = per_tier.iter().map(|t| t.revenue_local).sum();
    let total_customers: i128 = per_tier.iter().map(|t| t.customer_count as i128).sum();

    let average_price_local = if total_customers == 0 {
        0.0
    } else {
        total_local as f64 / total_customers as f64
    };

    RevenueResult {
        per_tier,
        total_local,
        total_foreign: to_foreign(total_local, exchange_rate),
        total_customers,
        average_price_local,
    }
}

/// Convert a local amount to foreign currency, unrounded
pub fn to_foreign(amount_local: i128, exchange_rate: f64) -> f64 {
    amount_local as f64 / exchange_rate
}
