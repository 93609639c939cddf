//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod schedule;
pub mod show_calendar;

pub use init::InitService;
pub use manage_config::ConfigService;
pub use schedule::ScheduleService;
pub use show_calendar::ShowCalendarService;
