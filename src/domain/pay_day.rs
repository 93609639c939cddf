//! Pay date resolution
//!
//! Turns a configured pay day of the month (1-31) into concrete pay dates,
//! correcting for short months and moving weekend pay dates onto a weekday.

use crate::domain::YearMonth;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Upper bound on the up-front allocation in `upcoming_pay_days`
const MAX_PREALLOCATED_DATES: usize = 120;

/// Which way a pay date falling on a weekend is moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Saturday and Sunday move back to Friday
    Previous,
    /// Saturday and Sunday move forward to Monday
    #[default]
    Next,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "previous" | "prev" => Ok(Direction::Previous),
            "next" => Ok(Direction::Next),
            _ => Err(format!(
                "Invalid direction: '{}'. Valid directions are: next, previous",
                s
            )),
        }
    }
}

/// Number of days in the given month
pub fn last_day_of_month(month: YearMonth) -> u32 {
    month.days()
}

/// Pay date for a month before weekend adjustment.
///
/// A pay day past the end of the month falls on the month's last day
/// (31 in April is the 30th, in February the 28th or 29th).
pub fn effective_day_for_month(month: YearMonth, pay_day: u32) -> NaiveDate {
    let last = last_day_of_month(month);
    if pay_day > last {
        month.day(last)
    } else {
        month.day(pay_day)
    }
}

/// Pay date for a month, moved off the weekend in the given direction.
///
/// The result is always Monday-Friday. It can fall outside `month`: a Sunday
/// 31st moved forward lands on the 1st of the following month.
pub fn adjust_for_weekend(month: YearMonth, pay_day: u32, direction: Direction) -> NaiveDate {
    let candidate = effective_day_for_month(month, pay_day);
    let overshoot = candidate.weekday().number_from_monday().saturating_sub(5);

    match direction {
        Direction::Previous => candidate - Days::new(u64::from(overshoot)),
        Direction::Next if overshoot > 0 => candidate + Days::new(u64::from(3 - overshoot)),
        Direction::Next => candidate,
    }
}

/// Next pay date on or after `today`, looking at this month and then the next.
///
/// If `today` is itself this month's pay date it is returned rather than
/// skipped. A `Previous` shift can pull next month's pay date back before
/// `today`; the month after is used then, so the result is never in the past.
///
/// Last month's pay date is not considered, even when a `Next` shift carried
/// it into this month (see [`pay_day_on_or_after`]).
///
/// # Panics
///
/// Inherits the panic of [`YearMonth::next`] within two months of
/// `NaiveDate::MAX`.
pub fn next_pay_day(today: NaiveDate, pay_day: u32, direction: Direction) -> NaiveDate {
    let current = YearMonth::of(today);

    let this_month = adjust_for_weekend(current, pay_day, direction);
    if today <= this_month {
        return this_month;
    }

    let following = current.next();
    let next_month = adjust_for_weekend(following, pay_day, direction);
    if today <= next_month {
        return next_month;
    }

    // Next month's pay date moved back before today
    debug!(
        %today,
        pay_day,
        %direction,
        "pay date pulled back into current month, rolling forward"
    );
    adjust_for_weekend(following.next(), pay_day, direction)
}

/// Earliest pay date on or after `today`.
///
/// Differs from [`next_pay_day`] only when last month's pay date was moved
/// forward into this month and has not passed yet: on Monday 1 September
/// 2025, with pay day 31 and `Next`, this is 1 September while
/// `next_pay_day` gives 30 September.
pub fn pay_day_on_or_after(today: NaiveDate, pay_day: u32, direction: Direction) -> NaiveDate {
    let carried = adjust_for_weekend(YearMonth::of(today).previous(), pay_day, direction);
    if today <= carried {
        return carried;
    }

    next_pay_day(today, pay_day, direction)
}

/// Latest pay date strictly before `date`
fn pay_day_before(date: NaiveDate, pay_day: u32, direction: Direction) -> NaiveDate {
    let anchor = YearMonth::of(date);
    let earliest = anchor.previous().previous();

    // Two months back always lands before `date`. Next month only counts
    // when a `Previous` shift pulled its pay date back into this month.
    [anchor.previous(), anchor, anchor.next()]
        .into_iter()
        .map(|month| adjust_for_weekend(month, pay_day, direction))
        .filter(|candidate| *candidate < date)
        .fold(
            adjust_for_weekend(earliest, pay_day, direction),
            |latest, candidate| latest.max(candidate),
        )
}

/// Latest pay date strictly before `today`
pub fn previous_pay_day(today: NaiveDate, pay_day: u32, direction: Direction) -> NaiveDate {
    pay_day_before(today, pay_day, direction)
}

/// Half-open span of days `[start, end)` between two consecutive pay dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Total number of days in the period
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Days since the period started (0 on the pay day itself)
    pub fn elapsed_days(&self, today: NaiveDate) -> i64 {
        (today - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Pay period containing `today`. On a pay day the new period starts that day.
pub fn pay_period(today: NaiveDate, pay_day: u32, direction: Direction) -> PayPeriod {
    let end = pay_day_on_or_after(today + Days::new(1), pay_day, direction);
    let start = pay_day_before(end, pay_day, direction);
    PayPeriod { start, end }
}

/// The next `count` pay dates, starting with `pay_day_on_or_after(today, ..)`
///
/// # Panics
///
/// Panics once the dates run past `NaiveDate::MAX`, which takes millions of
/// months; callers taking `count` from user input should bound it.
pub fn upcoming_pay_days(
    today: NaiveDate,
    pay_day: u32,
    direction: Direction,
    count: usize,
) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count.min(MAX_PREALLOCATED_DATES));
    let mut from = today;

    for _ in 0..count {
        let pay_date = pay_day_on_or_after(from, pay_day, direction);
        dates.push(pay_date);
        from = pay_date + Days::new(1);
    }

    dates
}
