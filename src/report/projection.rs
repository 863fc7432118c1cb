use super::format::{format_amount, format_rounded, format_thousands};
use crate::config::Config;
use crate::revenue::calculator::to_foreign;
use crate::revenue::pricing::{FOREIGN_CURRENCY, LOCAL_CURRENCY};
use crate::revenue::{calculate, RevenueResult, Tier};
use serde::Serialize;
use std::io::{self, Write};

const REPORT_WIDTH: usize = 65;

/// One projected month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub label: String,
    pub result: RevenueResult,
}

/// Twelve-month projection with its totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualProjection {
    pub year: i32,
    pub months: Vec<MonthlyRevenue>,
    pub annual_total_local: i128,
    /// Mean monthly local revenue; 0 with no scenarios
    pub monthly_average_local: f64,
    pub annual_total_foreign: f64,
}

/// Run every configured scenario through the calculator, in order
pub fn project_annual(config: &Config) -> AnnualProjection {
    let mut months = Vec::with_capacity(config.scenarios.len());
    let mut annual_total_local: i128 = 0;

    for scenario in &config.scenarios {
        let result = calculate(
            scenario.basic,
            scenario.pro,
            scenario.enterprise,
            &config.tiers,
            config.exchange_rate,
        );
        annual_total_local += result.total_local;
        tracing::debug!(
            month = %scenario.label,
            customers = %result.total_customers,
            total_local = %result.total_local,
            "projected month"
        );
        months.push(MonthlyRevenue {
            label: scenario.label.clone(),
            result,
        });
    }

    let monthly_average_local = if months.is_empty() {
        0.0
    } else {
        annual_total_local as f64 / months.len() as f64
    };

    AnnualProjection {
        year: config.year,
        months,
        annual_total_local,
        monthly_average_local,
        annual_total_foreign: to_foreign(annual_total_local, config.exchange_rate),
    }
}

/// Format one report row
fn format_month_row(month: &MonthlyRevenue) -> String {
    let result = &month.result;
    format!(
        "{:<4} {:<10} {:<12} {:<12} {:<12} {:<15}",
        month.label,
        result.total_customers,
        format_thousands(result.tier(Tier::Basic).revenue_local),
        format_thousands(result.tier(Tier::Pro).revenue_local),
        format_thousands(result.tier(Tier::Enterprise).revenue_local),
        format_amount(result.total_local),
    )
}

/// Print the annual projection report and return the computed projection
pub fn print_annual_projection<W: Write>(
    out: &mut W,
    config: &Config,
) -> io::Result<AnnualProjection> {
    let projection = project_annual(config);

    writeln!(out, "🚀 REVENUE PROJECTION {}", projection.year)?;
    writeln!(out, "{}", "=".repeat(REPORT_WIDTH))?;
    writeln!(
        out,
        "{:<4} {:<10} {:<12} {:<12} {:<12} {:<15}",
        "MON",
        "CUSTOMERS",
        "BASIC",
        "PRO",
        "ENTERPRISE",
        format!("TOTAL {}", LOCAL_CURRENCY)
    )?;
    writeln!(out, "{}", "-".repeat(REPORT_WIDTH))?;

    for month in &projection.months {
        writeln!(out, "{}", format_month_row(month).trim_end())?;
    }

    writeln!(out, "{}", "=".repeat(REPORT_WIDTH))?;
    writeln!(
        out,
        "💰 ANNUAL TOTAL {}: {} {}",
        projection.year,
        format_amount(projection.annual_total_local),
        LOCAL_CURRENCY
    )?;
    writeln!(
        out,
        "💰 MONTHLY AVERAGE: {} {}",
        format_rounded(projection.monthly_average_local),
        LOCAL_CURRENCY
    )?;
    writeln!(
        out,
        "💵 {} EQUIVALENT: {} {}",
        FOREIGN_CURRENCY,
        format_rounded(projection.annual_total_foreign),
        FOREIGN_CURRENCY
    )?;

    Ok(projection)
}
