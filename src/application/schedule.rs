//! Pay schedule queries: upcoming pay dates and the current pay period

use crate::domain::{pay_period, upcoming_pay_days, Direction, PayPeriod};
use crate::infrastructure::Config;
use chrono::NaiveDate;

/// Largest count accepted by `payday upcoming`, one hundred years of monthly pay
pub const MAX_UPCOMING_COUNT: i64 = 1200;

/// Service answering questions about the pay schedule
pub struct ScheduleService {
    pay_day: u32,
    direction: Direction,
}

impl ScheduleService {
    pub fn new(config: &Config) -> Self {
        ScheduleService {
            pay_day: config.setting().pay_day(),
            direction: config.direction,
        }
    }

    /// The next `count` pay dates on or after `from`
    pub fn upcoming(&self, from: NaiveDate, count: usize) -> Vec<NaiveDate> {
        upcoming_pay_days(from, self.pay_day, self.direction, count)
    }

    /// Pay period containing `date`
    pub fn period(&self, date: NaiveDate) -> PayPeriod {
        pay_period(date, self.pay_day, self.direction)
    }
}
