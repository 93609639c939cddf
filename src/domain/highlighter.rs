//! Two-month pay day calendar
//!
//! The top block gives context for where we are in the pay cycle, the bottom
//! block shows the month of the next pay date. Days already behind us are
//! dimmed, today and the days still to come carry the "today" style, and the
//! pay date gets its own style.

use crate::domain::markup::{HighlightTag, MonthMarkup};
use crate::domain::month_text::{MonthTextProvider, StandardMonthText};
use crate::domain::pay_day::{next_pay_day, Direction};
use crate::domain::YearMonth;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

const DEFAULT_TODAY_TAG: &str = "auto on $secondary";
const DEFAULT_PAY_DAY_TAG: &str = "auto on $primary";

/// Styles used for today and the pay day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub today_tag: HighlightTag,
    pub pay_day_tag: HighlightTag,
}

impl Theme {
    pub fn new(today_tag: impl Into<HighlightTag>, pay_day_tag: impl Into<HighlightTag>) -> Self {
        Theme {
            today_tag: today_tag.into(),
            pay_day_tag: pay_day_tag.into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(DEFAULT_TODAY_TAG, DEFAULT_PAY_DAY_TAG)
    }
}

/// Result of one calendar render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayDayView {
    pub today: NaiveDate,
    pub pay_date: NaiveDate,
    /// Days from today to the pay date, 0 on pay day
    pub days_remaining: i64,
    /// Both month blocks with markup, separated by a blank line
    pub text: String,
    /// Both month blocks without markup
    pub plain: String,
}

impl PayDayView {
    /// Caption shown under the calendar
    pub fn subtitle(&self) -> String {
        format!("{} days left", self.days_remaining)
    }
}

/// Builds the annotated two-month calendar around the next pay date
#[derive(Debug, Clone)]
pub struct CalendarHighlighter<P = StandardMonthText> {
    provider: P,
    theme: Theme,
}

impl CalendarHighlighter {
    /// Highlighter over the standard month layout
    pub fn new(theme: Theme) -> Self {
        CalendarHighlighter::with_provider(StandardMonthText, theme)
    }
}

impl Default for CalendarHighlighter {
    fn default() -> Self {
        CalendarHighlighter::new(Theme::default())
    }
}

impl<P: MonthTextProvider> CalendarHighlighter<P> {
    pub fn with_provider(provider: P, theme: Theme) -> Self {
        CalendarHighlighter { provider, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Upper block.
    ///
    /// When today and the pay date share a month this is the previous month,
    /// fully dimmed. Otherwise it is today's month with the past dimmed and
    /// today's style running from today to the end of the month.
    pub fn top_calendar(
        &self,
        today: NaiveDate,
        pay_date: NaiveDate,
        today_tag: &HighlightTag,
    ) -> String {
        self.top_block(today, pay_date, today_tag).render()
    }

    /// Lower block: the pay date's month with the pay day highlighted.
    ///
    /// If today is in that month the past is dimmed and today's style starts
    /// today; otherwise the whole month up to the pay day is still ahead and
    /// carries today's style from the 1st.
    pub fn bottom_calendar(
        &self,
        today: NaiveDate,
        pay_date: NaiveDate,
        today_tag: &HighlightTag,
        pay_day_tag: &HighlightTag,
    ) -> String {
        self.bottom_block(today, pay_date, today_tag, pay_day_tag)
            .render()
    }

    /// Resolve the next pay date and render both blocks
    pub fn render(&self, today: NaiveDate, pay_day: u32, direction: Direction) -> PayDayView {
        let pay_date = next_pay_day(today, pay_day, direction);
        let days_remaining = (pay_date - today).num_days();

        let top = self.top_block(today, pay_date, &self.theme.today_tag);
        let bottom = self.bottom_block(
            today,
            pay_date,
            &self.theme.today_tag,
            &self.theme.pay_day_tag,
        );

        debug!(%today, %pay_date, days_remaining, "rendered pay day calendar");

        PayDayView {
            today,
            pay_date,
            days_remaining,
            text: format!("{}\n{}", top.render(), bottom.render()),
            plain: format!("{}\n{}", top.plain(), bottom.plain()),
        }
    }

    fn top_block(
        &self,
        today: NaiveDate,
        pay_date: NaiveDate,
        today_tag: &HighlightTag,
    ) -> MonthMarkup {
        let current = YearMonth::of(today);

        if current.contains(pay_date) {
            MonthMarkup::new(self.provider.month_text(current.previous()))
                .open(1, HighlightTag::dim())
        } else {
            let markup = MonthMarkup::new(self.provider.month_text(current));
            past_and_remaining(markup, today, today_tag)
        }
    }

    fn bottom_block(
        &self,
        today: NaiveDate,
        pay_date: NaiveDate,
        today_tag: &HighlightTag,
        pay_day_tag: &HighlightTag,
    ) -> MonthMarkup {
        let pay_month = YearMonth::of(pay_date);
        let markup = MonthMarkup::new(self.provider.month_text(pay_month));

        let markup = if pay_month.contains(today) {
            past_and_remaining(markup, today, today_tag)
        } else {
            markup.open(1, today_tag.clone())
        };

        markup.local(pay_date.day(), pay_day_tag.clone())
    }
}

/// Dim from the 1st, then today's style from today onwards
fn past_and_remaining(markup: MonthMarkup, today: NaiveDate, today_tag: &HighlightTag) -> MonthMarkup {
    markup
        .open(1, HighlightTag::dim())
        .open(today.day(), today_tag.clone())
}
