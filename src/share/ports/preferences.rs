//! Ports for the preferences collaborator.

use std::sync::Arc;
use thiserror::Error;

/// Result type for preference operations.
pub type PreferencesResult<T> = Result<T, PreferencesError>;

/// Source of the configured message recipient.
pub trait RecipientSource: Send + Sync {
    /// Returns the configured recipient, or `None` when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] when preferences cannot be read.
    fn message_recipient(&self) -> PreferencesResult<Option<String>>;
}

/// Counter incremented when a composed message is actually sent.
pub trait UsageCounter: Send + Sync {
    /// Records one sent message.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] when the counter cannot be updated.
    fn record_message_sent(&self) -> PreferencesResult<()>;
}

/// Errors returned by preference adapters.
#[derive(Debug, Clone, Error)]
pub enum PreferencesError {
    /// Preferences storage could not be reached.
    #[error("preferences unavailable: {0}")]
    Unavailable(String),

    /// Storage-layer failure.
    #[error("preferences storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferencesError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
