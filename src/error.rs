//! Error types for payday

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for payday application
#[derive(Debug, Error)]
pub enum PaydayError {
    #[error("Not a payday directory: {0}")]
    NotPaydayDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid pay day: {0}")]
    InvalidPayDay(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PaydayError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PaydayError::NotPaydayDirectory(_) => 2,
            PaydayError::InvalidDate(_) => 3,
            PaydayError::InvalidPayDay(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PaydayError::NotPaydayDirectory(path) => {
                format!(
                    "Not a payday directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'payday init' in this directory to store your pay day\n\
                    • Navigate to a directory set up with 'payday init'\n\
                    • Set PAYDAY_ROOT environment variable to that directory\n\
                    • Pass the pay day directly: payday --pay-day 25",
                    path.display()
                )
            }
            PaydayError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • Day offsets: +7, -3\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    payday tomorrow\n\
                    payday 15-07-2025",
                    value
                )
            }
            PaydayError::InvalidPayDay(value) => {
                format!(
                    "Invalid pay day: '{}'\n\n\
                    The pay day must be a day of the month between 1 and 31.\n\
                    Days past the end of a short month fall on its last day.\n\
                    Example: payday config pay_day 25",
                    value
                )
            }
            PaydayError::Config(msg) => {
                if msg.contains("Invalid mode") {
                    format!(
                        "{}\n\n\
                        Valid modes: first, last, specific\n\
                        Example: payday config mode specific",
                        msg
                    )
                } else if msg.contains("Invalid direction") {
                    format!(
                        "{}\n\n\
                        'next' moves weekend pay days to Monday, 'previous' to Friday\n\
                        Example: payday config direction previous",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PaydayError
pub type Result<T> = std::result::Result<T, PaydayError>;
