//! Initialize payday settings use case

use crate::domain::{Direction, PayDaySetting};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Service for setting up a payday directory
pub struct InitService;

impl InitService {
    /// Create `.payday/config.toml` under `path` with the given pay day setting.
    pub fn execute(path: &Path, setting: PayDaySetting, direction: Direction) -> Result<Config> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new(setting, direction);
        repo.save_config(&config)?;

        info!(path = %path.display(), mode = %config.mode, "initialized payday settings");
        Ok(config)
    }
}
