//! Reference date ("today") parsing

use crate::error::{PaydayError, Result};
use chrono::{Duration, NaiveDate};

/// Largest day offset accepted in `+N` / `-N` references
const MAX_OFFSET_DAYS: i64 = 3660;

/// The date the calendar is computed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// Days relative to today (`+3`, `-10`)
    Offset(i64),
    /// Specific date
    Specific(NaiveDate),
}

impl DateReference {
    /// Parse a date reference: today, yesterday, tomorrow, +N, -N,
    /// DD-MM-YYYY or YYYY-MM-DD
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            "tomorrow" => Ok(DateReference::Tomorrow),
            _ if normalized.starts_with('+') || normalized.starts_with('-') => {
                Self::parse_offset(&normalized)
                    .ok_or_else(|| PaydayError::InvalidDate(input.to_string()))
            }
            _ => NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
                .map(DateReference::Specific)
                .map_err(|_| PaydayError::InvalidDate(input.to_string())),
        }
    }

    fn parse_offset(value: &str) -> Option<Self> {
        let (sign, digits) = value.split_at(1);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let days: i64 = digits.parse().ok()?;
        if days > MAX_OFFSET_DAYS {
            return None;
        }

        Some(DateReference::Offset(if sign == "-" { -days } else { days }))
    }

    /// Resolve to an actual date relative to `base_date`
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => base_date,
            DateReference::Yesterday => base_date - Duration::days(1),
            DateReference::Tomorrow => base_date + Duration::days(1),
            DateReference::Offset(days) => base_date + Duration::days(*days),
            DateReference::Specific(date) => *date,
        }
    }
}
