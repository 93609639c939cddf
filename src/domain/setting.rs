//! Pay day settings: how the configured pay day is chosen

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Lowest valid pay day of the month
pub const MIN_PAY_DAY: u32 = 1;

/// Highest valid pay day of the month. Shorter months cap it to their last day.
pub const MAX_PAY_DAY: u32 = 31;

/// How the pay day of the month is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayDayMode {
    /// Paid on the 1st
    First,
    /// Paid on the last day of the month
    #[default]
    Last,
    /// Paid on an explicit day (1-31)
    Specific,
}

impl PayDayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayDayMode::First => "first",
            PayDayMode::Last => "last",
            PayDayMode::Specific => "specific",
        }
    }

    /// Day this mode pins the pay day to, if any
    pub fn fixed_day(&self) -> Option<u32> {
        match self {
            PayDayMode::First => Some(MIN_PAY_DAY),
            PayDayMode::Last => Some(MAX_PAY_DAY),
            PayDayMode::Specific => None,
        }
    }
}

impl fmt::Display for PayDayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayDayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(PayDayMode::First),
            "last" => Ok(PayDayMode::Last),
            "specific" => Ok(PayDayMode::Specific),
            _ => Err(format!(
                "Invalid mode: '{}'. Valid modes are: first, last, specific",
                s
            )),
        }
    }
}

/// Check a pay day is within 1-31
pub fn is_valid_pay_day(day: u32) -> bool {
    (MIN_PAY_DAY..=MAX_PAY_DAY).contains(&day)
}

/// A pay day mode together with the day used by `Specific`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayDaySetting {
    mode: PayDayMode,
    day: u32,
}

impl PayDaySetting {
    pub fn new(mode: PayDayMode, day: u32) -> Self {
        PayDaySetting { mode, day }
    }

    pub fn first() -> Self {
        Self::new(PayDayMode::First, MIN_PAY_DAY)
    }

    pub fn last() -> Self {
        Self::new(PayDayMode::Last, MAX_PAY_DAY)
    }

    pub fn specific(day: u32) -> Self {
        Self::new(PayDayMode::Specific, day)
    }

    pub fn mode(&self) -> PayDayMode {
        self.mode
    }

    /// Pay day of the month handed to the resolver.
    ///
    /// An out-of-range specific day falls back to 31 (last day of the month).
    pub fn pay_day(&self) -> u32 {
        if let Some(day) = self.mode.fixed_day() {
            return day;
        }

        if is_valid_pay_day(self.day) {
            self.day
        } else {
            warn!(
                day = self.day,
                "pay day outside 1-31, using the last day of the month"
            );
            MAX_PAY_DAY
        }
    }
}

impl Default for PayDaySetting {
    fn default() -> Self {
        Self::last()
    }
}
