//! payday - Pay day countdown calendar
//!
//! Resolves the next pay date from a day-of-month setting, shifting pay days
//! that land on a weekend, and renders a two-month calendar with the pay date
//! and the remaining days marked up.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::PaydayError;
