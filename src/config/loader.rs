use super::types::Config;
use crate::error::{CalculatorError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the compiled-in configuration, or a validated TOML file when a path is given
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Config::default(),
        };
        config.check()?;
        Ok(config)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

impl Config {
    /// Validate configuration
    pub fn check(&self) -> Result<()> {
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(CalculatorError::Config(format!(
                "Exchange rate must be a positive number, got {}",
                self.exchange_rate
            )));
        }

        let mut seen_names = HashSet::new();
        for (tier, pricing) in self.tiers.iter() {
            if pricing.name.trim().is_empty() {
                return Err(CalculatorError::Config(format!(
                    "{} tier has an empty name",
                    tier
                )));
            }
            if !seen_names.insert(pricing.name.as_str()) {
                return Err(CalculatorError::Config(format!(
                    "Duplicate tier name: {}",
                    pricing.name
                )));
            }
        }

        for scenario in &self.scenarios {
            if scenario.label.trim().is_empty() {
                return Err(CalculatorError::Config(
                    "Scenario with empty label".to_string(),
                ));
            }
            if scenario.basic < 0 || scenario.pro < 0 || scenario.enterprise < 0 {
                return Err(CalculatorError::Config(format!(
                    "Scenario {} has a negative customer count",
                    scenario.label
                )));
            }
        }

        Ok(())
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<()> {
        println!("{}", self.to_toml()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revenue::Tier;

    const CUSTOM: &str = r#"
year = 2026
exchange_rate = 1000.0

[tiers.basic]
name = "starter"
price_local = 10000
price_foreign = 10.0
customer_limit = 1

[tiers.pro]
name = "team"
price_local = 20000
price_foreign = 20.0
customer_limit = 5

[tiers.enterprise]
name = "company"
price_local = 50000
price_foreign = 50.0
customer_limit = 100

[[scenarios]]
label = "Q1"
basic = 1
pro = 2
enterprise = 3
"#;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.scenarios.len(), 12);
    }

    #[test]
    fn test_load_from_str() {
        let config = ConfigLoader::load_from_str(CUSTOM).unwrap();
        assert_eq!(config.year, 2026);
        assert_eq!(config.tiers.get(Tier::Pro).name, "team");
        assert_eq!(config.scenarios.len(), 1);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!(
            "revcalc-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, CUSTOM).unwrap();

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();
        assert_eq!(config.exchange_rate, 1000.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/revcalc/config.toml");
        assert!(matches!(
            ConfigLoader::load(Some(path)),
            Err(CalculatorError::Io(_))
        ));
    }

    #[test]
    fn test_corrupted_toml() {
        assert!(matches!(
            ConfigLoader::load_from_str("year = "),
            Err(CalculatorError::Toml(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let parsed = ConfigLoader::load_from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_check_rejects_bad_exchange_rate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                exchange_rate: rate,
                ..Config::default()
            };
            assert!(matches!(config.check(), Err(CalculatorError::Config(_))));
        }
    }

    #[test]
    fn test_check_rejects_duplicate_tier_names() {
        let mut config = Config::default();
        config.tiers.pro.name = "basic".to_string();
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_rejects_empty_tier_name() {
        let mut config = Config::default();
        config.tiers.enterprise.name = "  ".to_string();
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_rejects_negative_scenario() {
        let mut config = Config::default();
        config.scenarios[3].pro = -1;
        assert!(config.check().is_err());
    }
}
