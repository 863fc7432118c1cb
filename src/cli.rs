use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "revcalc")]
#[command(version, about = "Monthly and annual SaaS revenue projection")]
pub struct Cli {
    /// Load tiers, exchange rate and scenarios from a TOML file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,

    /// Print the annual projection as JSON and exit
    #[arg(long = "json")]
    pub json: bool,

    /// Print the projection report without the interactive calculator
    #[arg(long = "no-interactive")]
    pub no_interactive: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["revcalc"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.print && !cli.check && !cli.json && !cli.no_interactive);
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::try_parse_from(["revcalc", "--config", "prices.toml", "--json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("prices.toml")));
        assert!(cli.json);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["revcalc", "--theme", "dark"]).is_err());
    }
}
