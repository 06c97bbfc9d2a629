//! Configuration management for Cupcake
//!
//! Every section is optional; a missing file or missing keys fall back to
//! the built-in defaults.
//!
//! ```toml
//! [pricing]
//! unit_price_cents = 200
//!
//! [pickup]
//! days = 4
//!
//! [share]
//! command = ["mail", "-s", "{subject}", "orders@example.com"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::options::{
    Price, Pricing, DEFAULT_PICKUP_DAYS, DEFAULT_UNIT_PRICE_CENTS, MAX_PICKUP_DAYS, QUANTITY_OPTIONS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pricing: PricingConfig,
    pub pickup: PickupConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub unit_price_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub days: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Program and arguments; `{subject}` is substituted, body goes to stdin
    pub command: Option<Vec<String>>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_price_cents: DEFAULT_UNIT_PRICE_CENTS,
        }
    }
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_PICKUP_DAYS,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            info!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Reject values the wizard cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.pricing.unit_price_cents == 0 {
            return Err(ConfigError::Invalid("pricing.unit_price_cents must be positive".to_string()).into());
        }
        let largest_order = QUANTITY_OPTIONS.iter().copied().max().unwrap_or(0);
        if Price::from_cents(self.pricing.unit_price_cents)
            .checked_times(largest_order)
            .is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "pricing.unit_price_cents is too large for an order of {}",
                largest_order
            ))
            .into());
        }
        if self.pickup.days == 0 {
            return Err(ConfigError::Invalid("pickup.days must be at least 1".to_string()).into());
        }
        if self.pickup.days > MAX_PICKUP_DAYS {
            return Err(ConfigError::Invalid(format!(
                "pickup.days must be at most {}",
                MAX_PICKUP_DAYS
            ))
            .into());
        }
        if matches!(&self.share.command, Some(command) if command.is_empty()) {
            return Err(ConfigError::Invalid("share.command must name a program".to_string()).into());
        }
        Ok(())
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::new(Price::from_cents(self.pricing.unit_price_cents))
    }

    pub fn share_command(&self) -> Option<&[String]> {
        self.share.command.as_deref()
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CUPCAKE_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("cupcake").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("cupcake"))
}
