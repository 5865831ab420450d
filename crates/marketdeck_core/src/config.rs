//! Layered runtime configuration.
//!
//! # Responsibility
//! - Provide compiled defaults for logging, toasts and the AI gateway.
//! - Merge an optional JSON file over defaults, then apply `MARKETDECK_*`
//!   environment overrides.
//!
//! # Invariants
//! - Objects merge per key; arrays and scalars are replaced; `null` is skipped.
//! - Invalid environment values are ignored and logged, never fatal.
//! - A loaded config always passes [`AppConfig::validate`].

use crate::logging::{default_log_level, normalize_level};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 4_000;
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const ENV_LOG_LEVEL: &str = "MARKETDECK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MARKETDECK_LOG_DIR";
pub const ENV_TOAST_DURATION_MS: &str = "MARKETDECK_TOAST_DURATION_MS";
pub const ENV_MODEL: &str = "MARKETDECK_MODEL";
pub const ENV_API_KEY: &str = "MARKETDECK_API_KEY";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// One of trace|debug|info|warn|error.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: std::env::temp_dir().join("marketdeck").join("logs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastConfig {
    /// Applied when a toast request carries no explicit duration.
    pub default_duration_ms: u64,
}

impl ToastConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl GatewayConfig {
    /// True when a non-blank API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub toast: ToastConfig,
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Defaults, then `path` when it exists, then process environment.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON file and deep-merges it over defaults.
    ///
    /// A missing file yields defaults; unreadable or malformed files are errors.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(
                "event=config_load module=config status=noop reason=missing path={}",
                path.display()
            );
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        debug!(
            "event=config_load module=config status=ok path={}",
            path.display()
        );
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let user: Value = serde_json::from_str(content)?;
        let defaults = serde_json::to_value(Self::default())?;
        let config: Self = serde_json::from_value(deep_merge(defaults, user))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `MARKETDECK_*` overrides read through `lookup`.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            match normalize_level(&level) {
                Ok(level) => self.logging.level = level.to_string(),
                Err(err) => warn!(
                    "event=config_env module=config status=ignored \
                     key={ENV_LOG_LEVEL} reason={err}"
                ),
            }
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            self.logging.dir = PathBuf::from(dir);
        }
        if let Some(raw) = read(ENV_TOAST_DURATION_MS) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => self.toast.default_duration_ms = ms,
                _ => warn!(
                    "event=config_env module=config status=ignored \
                     key={ENV_TOAST_DURATION_MS} value={raw}"
                ),
            }
        }
        if let Some(model) = read(ENV_MODEL) {
            self.gateway.model = model;
        }
        if let Some(key) = read(ENV_API_KEY) {
            self.gateway.api_key = Some(key);
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        normalize_level(&self.logging.level).map_err(ConfigError::Invalid)?;
        if self.toast.default_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "toast.defaultDurationMs must be greater than zero".to_string(),
            ));
        }
        if self.gateway.model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "gateway.model cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Recursive merge of `source` over `target`.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                if source_value.is_null() {
                    continue;
                }
                let merged = match target_map.remove(&key) {
                    Some(target_value) => deep_merge(target_value, source_value),
                    None => source_value,
                };
                target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}
