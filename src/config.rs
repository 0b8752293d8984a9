// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Sort PDF files by name instead of keeping the directory listing order.
    #[serde(default)]
    pub sort_files: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log destination while the terminal form owns the screen.
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Layers built-in defaults, the TOML file (skipped when absent) and
    /// `PDF_KEYWORD_SEARCH__*` environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let mut builder = config::Config::builder()
            .set_default("search.sort_files", defaults.search.sort_files)
            .and_then(|b| {
                b.set_default(
                    "logging.file",
                    defaults.logging.file.to_string_lossy().to_string(),
                )
            })
            .and_then(|b| b.set_default("output.show_progress", defaults.output.show_progress))
            .map_err(|e| SearchError::Config(e.to_string()))?;

        builder = builder.add_source(config::File::from(path).required(false));

        builder = builder.add_source(
            config::Environment::with_prefix("PDF_KEYWORD_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            search: SearchConfig::default(),
            logging: LoggingConfig {
                file: PathBuf::from("pdf_keyword_search.log"),
            },
            output: OutputConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logging.file.as_os_str().is_empty() {
            return Err(SearchError::Config(
                "logging.file must not be empty".to_string(),
            ));
        }

        if self.logging.file.is_dir() {
            return Err(SearchError::Config(format!(
                "logging.file points to a directory: {}",
                self.logging.file.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    const SORT_FILES_VAR: &str = "PDF_KEYWORD_SEARCH__SEARCH__SORT_FILES";

    // loads read the process environment, which the override test mutates
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_load_from_file() {
        let _env = env_lock();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            "[search]\nsort_files = true\n\n[logging]\nfile = \"search.log\"\n\n[output]\nshow_progress = false\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.search.sort_files);
        assert!(!config.output.show_progress);
        assert_eq!(config.logging.file, PathBuf::from("search.log"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let _env = env_lock();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "[logging]\nfile = \"search.log\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.search.sort_files);
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let _env = env_lock();
        let temp = TempDir::new().unwrap();

        let config = Config::load(Some(&temp.path().join("missing.toml"))).unwrap();
        assert!(!config.search.sort_files);
        assert!(config.output.show_progress);
        assert_eq!(config.logging.file, PathBuf::from("pdf_keyword_search.log"));
    }

    #[test]
    fn test_env_overrides_apply_without_config_file() {
        let _env = env_lock();
        let temp = TempDir::new().unwrap();

        unsafe { std::env::set_var(SORT_FILES_VAR, "true") };
        let config = Config::load(Some(&temp.path().join("missing.toml")));
        unsafe { std::env::remove_var(SORT_FILES_VAR) };

        assert!(config.unwrap().search.sort_files);
    }

    #[test]
    fn test_rejects_directory_log_file() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default_config();
        config.logging.file = temp.path().to_path_buf();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default_config().validate().is_ok());
    }
}
