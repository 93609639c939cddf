//! Infrastructure layer - Settings persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, SettingsRepository};
