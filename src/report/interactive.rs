use super::format::{format_amount, format_rounded, format_thousands};
use crate::config::Config;
use crate::error::{CalculatorError, Result};
use crate::revenue::pricing::{FOREIGN_CURRENCY, LOCAL_CURRENCY};
use crate::revenue::{calculate, RevenueResult, Tier};
use std::io::{BufRead, Write};

/// Shown whenever interactive input cannot be used
pub const FALLBACK_MESSAGE: &str = "🎯 Use the standard projection shown above.";

const SECTION_WIDTH: usize = 50;

/// Terminal state of an interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum InteractiveOutcome {
    /// All three counts parsed and the result was printed
    Reported(RevenueResult),
    /// Input was unusable; the fallback message was printed
    Fallback,
}

/// Prompt for one tier and parse the answer
fn read_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    tier: Tier,
    config: &Config,
) -> Result<i64> {
    write!(
        output,
        "{} plan customers ({} {}): ",
        tier,
        LOCAL_CURRENCY,
        format_thousands(config.tiers.get(tier).price_local as i128)
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CalculatorError::InputClosed { tier });
    }

    line.trim()
        .parse::<i64>()
        .map_err(|_| CalculatorError::InvalidCount {
            tier,
            input: line.trim().to_string(),
        })
}

fn read_and_report<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<RevenueResult> {
    writeln!(output)?;
    writeln!(output, "{}", "=".repeat(SECTION_WIDTH))?;
    writeln!(output, "🧮 CUSTOM CALCULATOR")?;
    writeln!(output, "{}", "=".repeat(SECTION_WIDTH))?;
    writeln!(output, "Enter the number of customers per plan:")?;

    let basic = read_count(input, output, Tier::Basic, config)?;
    let pro = read_count(input, output, Tier::Pro, config)?;
    let enterprise = read_count(input, output, Tier::Enterprise, config)?;

    let result = calculate(basic, pro, enterprise, &config.tiers, config.exchange_rate);

    writeln!(output)?;
    writeln!(output, "💰 CUSTOM RESULTS:")?;
    writeln!(output, "   Total customers: {}", result.total_customers)?;
    writeln!(
        output,
        "   Monthly revenue: {} {}",
        format_amount(result.total_local),
        LOCAL_CURRENCY
    )?;
    writeln!(
        output,
        "   Annual revenue: {} {}",
        format_amount(result.annual_local()),
        LOCAL_CURRENCY
    )?;
    writeln!(
        output,
        "   {} equivalent: {} {}/month",
        FOREIGN_CURRENCY,
        format_rounded(result.total_foreign),
        FOREIGN_CURRENCY
    )?;

    Ok(result)
}

/// Ask for one customer count per tier and print the derived totals.
///
/// Single pass with no re-prompting: any read, parse or write failure prints
/// [`FALLBACK_MESSAGE`] instead. Errors never escape.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &Config,
) -> InteractiveOutcome {
    match read_and_report(&mut input, &mut output, config) {
        Ok(result) => InteractiveOutcome::Reported(result),
        Err(e) => {
            tracing::debug!("interactive input rejected: {}", e);
            let printed = writeln!(output, "{}", FALLBACK_MESSAGE).and_then(|_| output.flush());
            if let Err(e) = printed {
                tracing::warn!("Failed to print fallback message: {}", e);
            }
            InteractiveOutcome::Fallback
        }
    }
}
