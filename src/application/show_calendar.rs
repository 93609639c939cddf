//! Show pay day calendar use case

use crate::domain::{CalendarHighlighter, Direction, PayDayView};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use tracing::debug;

/// Service rendering the two-month pay day calendar
pub struct ShowCalendarService {
    highlighter: CalendarHighlighter,
    pay_day: u32,
    direction: Direction,
}

impl ShowCalendarService {
    /// Build the service from stored settings
    pub fn new(config: &Config) -> Self {
        ShowCalendarService {
            highlighter: CalendarHighlighter::new(config.theme()),
            pay_day: config.setting().pay_day(),
            direction: config.direction,
        }
    }

    /// Override the configured pay day for a single run
    pub fn with_pay_day(mut self, pay_day: u32) -> Self {
        self.pay_day = pay_day;
        self
    }

    /// Override the configured weekend direction for a single run
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn execute(&self, today: NaiveDate) -> PayDayView {
        debug!(%today, pay_day = self.pay_day, direction = %self.direction, "rendering calendar");
        self.highlighter.render(today, self.pay_day, self.direction)
    }
}
