//! API configuration resolved from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every auth request goes through one base URL. On the server it comes from
//! `RESTO_API_URL` at runtime; the WASM bundle has no process environment, so
//! the value captured at compile time is used there.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_ENV: &str = "RESTO_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid RESTO_API_URL: {0:?} (expected an http(s) URL)")]
    InvalidBaseUrl(String),
}

/// Where the review API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from `RESTO_API_URL`.
    ///
    /// Lookup order: runtime environment, then the compile-time value, then
    /// [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the configured value is empty
    /// or does not use an `http`/`https` scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| option_env!("RESTO_API_URL").map(str::to_owned));
        match raw {
            Some(raw) => Self::from_base_url(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Validate and normalize an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for empty or non-http(s) values.
    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Full URL for an API path such as `"login"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
