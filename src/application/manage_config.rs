//! Config management use case

use crate::domain::setting::is_valid_pay_day;
use crate::domain::{Direction, PayDayMode};
use crate::error::{PaydayError, Result};
use crate::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use std::str::FromStr;
use tracing::debug;

/// Keys accepted by `payday config`
pub const CONFIG_KEYS: [&str; 5] = ["mode", "pay_day", "direction", "today_tag", "pay_day_tag"];

/// Service for managing payday configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "mode" => Ok(config.mode.to_string()),
            "pay_day" => Ok(config.setting().pay_day().to_string()),
            "direction" => Ok(config.direction.to_string()),
            "today_tag" => Ok(config.today_tag),
            "pay_day_tag" => Ok(config.pay_day_tag),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "mode" => {
                let mode = PayDayMode::from_str(value).map_err(PaydayError::Config)?;
                config.set_mode(mode);
            }
            "pay_day" => {
                let day = parse_pay_day(value)?;
                config.set_pay_day(day);
            }
            "direction" => {
                config.direction = Direction::from_str(value).map_err(PaydayError::Config)?;
            }
            "today_tag" => config.today_tag = non_empty_tag(key, value)?,
            "pay_day_tag" => config.pay_day_tag = non_empty_tag(key, value)?,
            _ => return Err(unknown_key(key)),
        }

        debug!(key, value, "updating config");
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

/// Parse a pay day given on the command line, accepting only 1-31
pub fn parse_pay_day(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|day| is_valid_pay_day(*day))
        .ok_or_else(|| PaydayError::InvalidPayDay(value.to_string()))
}

fn non_empty_tag(key: &str, value: &str) -> Result<String> {
    let tag = value.trim();
    if tag.is_empty() {
        return Err(PaydayError::Config(format!("'{}' cannot be empty", key)));
    }
    Ok(tag.to_string())
}

fn unknown_key(key: &str) -> PaydayError {
    PaydayError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
