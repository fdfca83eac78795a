use std::env;

use serde::Deserialize;

use crate::currency::CurrencyCode;
use crate::errors::ConfigError;

pub const CONFIG_ENV: &str = "BANK_SIM_CONFIG";
pub const CURRENCY_ENV: &str = "BANK_SIM_CURRENCY";
pub const PLAIN_ENV: &str = "BANK_SIM_PLAIN";
pub const NO_COLOR_ENV: &str = "NO_COLOR";
pub const SCRIPT_ENV: &str = "BANK_SIM_CLI_SCRIPT";

/// Session preferences. Nothing is read from or written to disk; every field
/// comes from defaults and environment overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: CurrencyCode,
    pub plain_output: bool,
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            plain_output: false,
            show_banner: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`, which plays the role of
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)?,
            _ => Config::default(),
        };

        if let Some(code) = lookup(CURRENCY_ENV).filter(|value| !value.trim().is_empty()) {
            config.currency = CurrencyCode::new(code.trim());
        }
        if lookup(PLAIN_ENV).is_some_and(|value| is_truthy(&value)) {
            config.plain_output = true;
        }
        // https://no-color.org: any non-empty value disables colour.
        if lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) {
            config.plain_output = true;
        }

        Ok(config)
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
