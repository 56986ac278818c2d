//! Runtime configuration
//!
//! Values come from built-in defaults, overridden by `WALLET_CORE_*`
//! environment variables. A `.env` file, when present, is loaded first.

use config::{Config, Environment};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_TIMESTAMPS, ENV_PREFIX};
use crate::shared::error::WalletError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletCoreConfig {
    /// `env_logger` filter directives, e.g. `info` or `wallet_core=debug`
    pub log_level: String,
    pub log_timestamps: bool,
}

impl Default for WalletCoreConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_timestamps: DEFAULT_LOG_TIMESTAMPS,
        }
    }
}

impl WalletCoreConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self, WalletError> {
        dotenv().ok();
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Build configuration from defaults layered under `environment`
    pub fn from_environment(environment: Environment) -> Result<Self, WalletError> {
        let settings = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("log_timestamps", DEFAULT_LOG_TIMESTAMPS)?
            .add_source(environment.try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WalletError> {
        if self.log_level.trim().is_empty() {
            return Err(WalletError::config("log_level cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = WalletCoreConfig::from_environment(environment(&[]))
            .expect("Failed to load default config");

        assert_eq!(config, WalletCoreConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = WalletCoreConfig::from_environment(environment(&[
            ("WALLET_CORE_LOG_LEVEL", "wallet_core=debug"),
            ("WALLET_CORE_LOG_TIMESTAMPS", "false"),
        ]))
        .expect("Failed to load config");

        assert_eq!(config.log_level, "wallet_core=debug");
        assert!(!config.log_timestamps);
    }

    #[test]
    fn test_unprefixed_variables_are_ignored() {
        let config = WalletCoreConfig::from_environment(environment(&[("LOG_LEVEL", "trace")]))
            .expect("Failed to load config");

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_empty_log_level_is_rejected() {
        let result =
            WalletCoreConfig::from_environment(environment(&[("WALLET_CORE_LOG_LEVEL", " ")]));

        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let result = WalletCoreConfig::from_environment(environment(&[(
            "WALLET_CORE_LOG_TIMESTAMPS",
            "sometimes",
        )]));

        assert!(matches!(result, Err(WalletError::Config(_))));
    }
}
