//! File system settings repository

use crate::error::{PaydayError, Result};
use crate::infrastructure::config::{Config, SETTINGS_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the settings root
pub const ROOT_ENV_VAR: &str = "PAYDAY_ROOT";

/// Abstract repository for payday settings
pub trait SettingsRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .payday/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .payday/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .payday directory exists
    fn is_initialized(&self) -> bool;

    /// Create .payday directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SettingsRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the settings root: PAYDAY_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_settings_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PaydayError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'payday init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    SETTINGS_DIR,
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Find the settings root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_settings_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(PaydayError::NotPaydayDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_settings_dir(path: &Path) -> bool {
        path.join(SETTINGS_DIR).is_dir()
    }
}

impl SettingsRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_settings_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let settings_dir = self.root.join(SETTINGS_DIR);

        if settings_dir.exists() {
            return Err(PaydayError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&settings_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, PayDaySetting};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_creates_settings_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".payday").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        match repo.initialize().unwrap_err() {
            PaydayError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".payday")).unwrap();

        let subdir = temp.path().join("reports").join("2025");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_without_settings_dir() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            PaydayError::NotPaydayDirectory(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotPaydayDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let config = Config::new(PayDaySetting::first(), Direction::Previous);
        repo.save_config(&config).unwrap();

        assert_eq!(repo.load_config().unwrap(), config);
    }

    #[test]
    fn test_discover_uses_root_env_var() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV_VAR);

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".payday")).unwrap();
        std::env::set_var(ROOT_ENV_VAR, temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_root_env_var_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV_VAR);

        let temp = TempDir::new().unwrap();
        std::env::set_var(ROOT_ENV_VAR, temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            PaydayError::Config(msg) => {
                assert!(msg.contains("PAYDAY_ROOT"));
                assert!(msg.contains("no .payday directory"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
