//! Configuration management

use crate::domain::{Direction, HighlightTag, PayDayMode, PayDaySetting, Theme};
use crate::error::{PaydayError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding payday settings
pub const SETTINGS_DIR: &str = ".payday";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mode: PayDayMode,
    #[serde(default = "default_pay_day")]
    pub pay_day: u32,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_today_tag")]
    pub today_tag: String,
    #[serde(default = "default_pay_day_tag")]
    pub pay_day_tag: String,
}

fn default_pay_day() -> u32 {
    PayDaySetting::default().pay_day()
}

fn default_today_tag() -> String {
    Theme::default().today_tag.to_string()
}

fn default_pay_day_tag() -> String {
    Theme::default().pay_day_tag.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new(PayDaySetting::default(), Direction::default())
    }
}

impl Config {
    /// Create a new config with default tags
    pub fn new(setting: PayDaySetting, direction: Direction) -> Self {
        Config {
            mode: setting.mode(),
            pay_day: setting.pay_day(),
            direction,
            today_tag: default_today_tag(),
            pay_day_tag: default_pay_day_tag(),
        }
    }

    /// Pay day setting described by this config
    pub fn setting(&self) -> PayDaySetting {
        PayDaySetting::new(self.mode, self.pay_day)
    }

    /// Switch pay day mode. First and last pin the stored day to 1 and 31.
    pub fn set_mode(&mut self, mode: PayDayMode) {
        self.mode = mode;
        if let Some(day) = mode.fixed_day() {
            self.pay_day = day;
        }
    }

    /// Set an explicit pay day, switching to the specific mode
    pub fn set_pay_day(&mut self, day: u32) {
        self.mode = PayDayMode::Specific;
        self.pay_day = day;
    }

    pub fn theme(&self) -> Theme {
        Theme::new(
            HighlightTag::new(self.today_tag.clone()),
            HighlightTag::new(self.pay_day_tag.clone()),
        )
    }

    /// Load config from .payday/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SETTINGS_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PaydayError::NotPaydayDirectory(path.to_path_buf())
            } else {
                PaydayError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PaydayError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .payday/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let settings_dir = path.join(SETTINGS_DIR);
        let config_path = settings_dir.join(CONFIG_FILE);

        if !settings_dir.exists() {
            fs::create_dir(&settings_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
