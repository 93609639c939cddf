//! Plain-text month grids

use crate::domain::YearMonth;
use chrono::Datelike;

const WEEK_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Width of a week row: seven two-column days and six separators
const ROW_WIDTH: usize = 20;

/// Source of the raw text for one month's calendar
pub trait MonthTextProvider {
    /// Text block for the month: a title line, a weekday header row and one
    /// row of day numbers per week, each line ending in a newline.
    fn month_text(&self, month: YearMonth) -> String;
}

/// Conventional Monday-first month layout:
///
/// ```text
///      July 2025
/// Mo Tu We Th Fr Sa Su
///     1  2  3  4  5  6
///  7  8  9 10 11 12 13
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMonthText;

impl MonthTextProvider for StandardMonthText {
    fn month_text(&self, month: YearMonth) -> String {
        let title = month.first_day().format("%B %Y").to_string();

        let mut text = String::new();
        text.push_str(center(&title, ROW_WIDTH).trim_end());
        text.push('\n');
        text.push_str(WEEK_HEADER);
        text.push('\n');

        let leading = month.first_day().weekday().num_days_from_monday() as usize;
        let mut week: Vec<String> = vec!["  ".to_string(); leading];

        for day in 1..=month.days() {
            week.push(format!("{:>2}", day));
            if week.len() == 7 {
                push_week(&mut text, &week);
                week.clear();
            }
        }
        if !week.is_empty() {
            push_week(&mut text, &week);
        }

        text
    }
}

fn push_week(text: &mut String, week: &[String]) {
    text.push_str(week.join(" ").trim_end());
    text.push('\n');
}

/// Center text in a field, odd padding going to the right
/// unless both padding and width are odd.
fn center(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let padding = width - len;
    let left = padding / 2 + (padding & width & 1);
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), value, " ".repeat(right))
}
