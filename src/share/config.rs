//! Configuration for share activations.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default alert title.
pub const DEFAULT_DISPLAY_NAME: &str = "Other";

/// Default upper bound for a single provider load, in milliseconds.
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 10_000;

/// Tunables for a share activation.
///
/// # Examples
///
/// ```
/// use courier::share::config::ShareConfig;
/// use std::time::Duration;
///
/// let config = ShareConfig::from_json(r#"{ "load_timeout_ms": 2500 }"#)
///     .expect("valid configuration");
/// assert_eq!(config.load_timeout(), Duration::from_millis(2500));
/// assert_eq!(config.display_name, "Other");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    /// Title used for failure alerts.
    pub display_name: String,
    /// Upper bound for a single provider load, in milliseconds.
    pub load_timeout_ms: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_owned(),
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
        }
    }
}

impl ShareConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the alert title.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the per-provider load timeout.
    ///
    /// A timeout under one millisecond would fail every asynchronous load,
    /// so it is replaced by [`DEFAULT_LOAD_TIMEOUT_MS`].
    #[must_use]
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout_ms = match u64::try_from(timeout.as_millis()) {
            Ok(0) => DEFAULT_LOAD_TIMEOUT_MS,
            Ok(millis) => millis,
            Err(_) => u64::MAX,
        };
        self
    }

    /// Returns the per-provider load timeout.
    ///
    /// A zero `load_timeout_ms` reads as the default.
    #[must_use]
    pub const fn load_timeout(&self) -> Duration {
        let millis = if self.load_timeout_ms == 0 {
            DEFAULT_LOAD_TIMEOUT_MS
        } else {
            self.load_timeout_ms
        };
        Duration::from_millis(millis)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout or a blank
    /// display name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "load_timeout_ms",
                message: "must be greater than zero".to_owned(),
            });
        }
        if self.display_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "display_name",
                message: "must not be blank".to_owned(),
            });
        }
        Ok(())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`ShareConfig`].
    #[error("failed to parse share configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// The offending key.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },
}
