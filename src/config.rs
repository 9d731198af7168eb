//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so `from_env` reads the
//! `MARKETPLACE_*` variables through `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const API_BASE_URL_VAR: &str = "MARKETPLACE_API_BASE_URL";
pub const LOG_LEVEL_VAR: &str = "MARKETPLACE_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("unknown {var}: {value} (expected error, warn, info, debug, or trace)")]
    LogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the auth API, without trailing slash.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build from the variables captured at compile time.
    ///
    /// Optional:
    /// - `MARKETPLACE_API_BASE_URL`: default `/api`
    /// - `MARKETPLACE_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match var {
            API_BASE_URL_VAR => option_env!("MARKETPLACE_API_BASE_URL").map(str::to_owned),
            LOG_LEVEL_VAR => option_env!("MARKETPLACE_LOG_LEVEL").map(str::to_owned),
            _ => None,
        })
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup(API_BASE_URL_VAR) {
            Some(raw) => parse_api_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => parse_log_level(&raw)?,
            None => DEFAULT_LOG_LEVEL,
        };
        Ok(Self { api_base_url, log_level })
    }

    /// `from_env`, falling back to defaults with a warning.
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            leptos::logging::warn!("config: {e}; using defaults");
            Self::default()
        })
    }
}

fn parse_api_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var: API_BASE_URL_VAR });
    }
    // "/" alone trims to "", which joins as a root-relative path.
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        _ => Err(ConfigError::LogLevel { var: LOG_LEVEL_VAR, value: raw.to_owned() }),
    }
}
