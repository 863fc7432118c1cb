use saas_revenue::cli::Cli;
use saas_revenue::config::ConfigLoader;
use saas_revenue::report::{print_annual_projection, project_annual, run_interactive};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    saas_revenue::logging::init();
    let cli = Cli::parse_args();

    let config = ConfigLoader::load(cli.config.as_deref())?;

    if cli.print {
        config.print()?;
        return Ok(());
    }

    if cli.check {
        println!("✓ Configuration valid");
        return Ok(());
    }

    if cli.json {
        let projection = project_annual(&config);
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let projection = print_annual_projection(&mut out, &config)?;
    out.flush()?;
    tracing::debug!(
        annual_total = %projection.annual_total_local,
        months = projection.months.len(),
        "annual projection printed"
    );

    if cli.no_interactive {
        return Ok(());
    }

    // Both outcomes are terminal and exit cleanly
    let outcome = run_interactive(io::stdin().lock(), out, &config);
    tracing::debug!(?outcome, "interactive session finished");

    Ok(())
}
