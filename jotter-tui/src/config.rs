//! Configuration loading for the JOTTER TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub tick_interval_ms: u64,
    /// Quiet period before an edited search query becomes effective.
    pub debounce_ms: u64,
    /// Cached fetch results older than this force a refetch on the next
    /// read. 0 disables reuse entirely.
    pub cache_max_age_secs: u64,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or JOTTER_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Invalid argument for {flag}: {reason}")]
    InvalidArgument { flag: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "debounce_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "synthbrute" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'synthbrute' is supported".to_string(),
            });
        }
        Ok(())
    }
}

/// Launch-time arguments: the filter slug picks the session's tag, an
/// optional note id opens the detail view directly.
#[derive(Debug, Clone)]
pub struct LaunchArgs {
    pub filter_slug: String,
    pub note_id: Option<i64>,
}

impl LaunchArgs {
    pub fn parse() -> Result<Self, ConfigError> {
        Self::from_iter(std::env::args().skip(1))
    }

    fn from_iter(args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        let mut filter_slug = "all".to_string();
        let mut note_id = None;
        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--filter" => {
                    filter_slug = args.next().ok_or(ConfigError::InvalidArgument {
                        flag: "--filter",
                        reason: "expected a slug".to_string(),
                    })?;
                }
                "--note" => {
                    let raw = args.next().ok_or(ConfigError::InvalidArgument {
                        flag: "--note",
                        reason: "expected a note id".to_string(),
                    })?;
                    let id = raw.parse::<i64>().map_err(|_| ConfigError::InvalidArgument {
                        flag: "--note",
                        reason: format!("not an integer: {}", raw),
                    })?;
                    note_id = Some(id);
                }
                // --config is consumed by the config loader.
                "--config" => {
                    args.next();
                }
                _ => {}
            }
        }
        Ok(Self {
            filter_slug,
            note_id,
        })
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("JOTTER_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_args_default_to_all_filter() {
        let args = LaunchArgs::from_iter(std::iter::empty()).unwrap();
        assert_eq!(args.filter_slug, "all");
        assert!(args.note_id.is_none());
    }

    #[test]
    fn launch_args_parse_filter_and_note() {
        let raw = ["--filter", "Work", "--note", "42"];
        let args = LaunchArgs::from_iter(raw.iter().map(|s| s.to_string())).unwrap();
        assert_eq!(args.filter_slug, "Work");
        assert_eq!(args.note_id, Some(42));
    }

    #[test]
    fn launch_args_reject_non_integer_note() {
        let raw = ["--note", "abc"];
        assert!(LaunchArgs::from_iter(raw.iter().map(|s| s.to_string())).is_err());
    }
}
