//! Output formatting utilities

use crate::domain::{PayDayView, PayPeriod};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%a %d-%m-%Y";

/// Format the calendar followed by the countdown line
pub fn format_calendar(view: &PayDayView, plain: bool) -> String {
    let body = if plain { &view.plain } else { &view.text };
    format!("{}\n{}\n", body, view.subtitle())
}

/// Format a list of pay dates, counting days from `from`
pub fn format_upcoming(dates: &[NaiveDate], from: NaiveDate) -> String {
    if dates.is_empty() {
        return "No pay dates".to_string();
    }

    let mut output = String::new();
    for date in dates {
        let days = (*date - from).num_days();
        output.push_str(&format!(
            "{}  {}\n",
            date.format(DATE_FORMAT),
            describe_distance(days)
        ));
    }
    output
}

/// Format the pay period around `date`
pub fn format_period(period: &PayPeriod, date: NaiveDate) -> String {
    format!(
        "Period: {} to {}\nDay {} of {}\n{}\n",
        period.start.format(DATE_FORMAT),
        period.end.format(DATE_FORMAT),
        period.elapsed_days(date) + 1,
        period.length_days(),
        describe_distance((period.end - date).num_days())
    )
}

fn describe_distance(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {} days", n),
    }
}
