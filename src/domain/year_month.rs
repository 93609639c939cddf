//! Calendar month value type

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;

/// A calendar month of a specific year.
///
/// Stored as the first day of the month, so every value is a valid month and
/// month arithmetic reuses chrono's date arithmetic.
///
/// # Panics
///
/// [`next`](Self::next) and [`previous`](Self::previous) panic when the result
/// would leave chrono's range (`NaiveDate::MIN` to `NaiveDate::MAX`). Every
/// resolver entry point steps up to two months either side of its input, so
/// `next_pay_day`, `pay_day_on_or_after`, `previous_pay_day`, `pay_period`,
/// `upcoming_pay_days` and `CalendarHighlighter::render` inherit the panic for
/// dates within about three months of those limits. Dates accepted on the
/// command line are nowhere near them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Month for a year and a month number (1-12). Returns None for an invalid month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| YearMonth { first })
    }

    /// Month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Following month, December rolling over to January of the next year.
    ///
    /// Panics past `NaiveDate::MAX`.
    pub fn next(&self) -> Self {
        YearMonth {
            first: self.first + Months::new(1),
        }
    }

    /// Preceding month, January rolling back to December of the prior year.
    ///
    /// Panics before `NaiveDate::MIN`.
    pub fn previous(&self) -> Self {
        YearMonth {
            first: self.first - Months::new(1),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first - Days::new(1)
    }

    /// Number of days in the month (28-31)
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    /// Date of a day in this month, capped to the month's last day.
    /// Day 0 is treated as the 1st.
    pub fn day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days());
        self.first + Days::new(u64::from(day - 1))
    }

    /// Whether the date falls in this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        YearMonth::of(date) == *self
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}
