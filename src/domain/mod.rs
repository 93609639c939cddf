//! Domain layer - Pay date resolution and calendar highlighting

pub mod highlighter;
pub mod markup;
pub mod month_text;
pub mod pay_day;
pub mod reference_date;
pub mod setting;
pub mod year_month;

pub use highlighter::{CalendarHighlighter, PayDayView, Theme};
pub use markup::{dim_first_day, highlight_day, Annotation, HighlightTag, MonthMarkup, Scope};
pub use month_text::{MonthTextProvider, StandardMonthText};
pub use pay_day::{
    adjust_for_weekend, effective_day_for_month, last_day_of_month, next_pay_day,
    pay_day_on_or_after, pay_period, previous_pay_day, upcoming_pay_days, Direction, PayPeriod,
};
pub use reference_date::DateReference;
pub use setting::{PayDayMode, PayDaySetting};
pub use year_month::YearMonth;
