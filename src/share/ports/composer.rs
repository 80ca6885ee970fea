//! Ports for handing results back to the host.

use crate::share::domain::{FailureNotice, OutgoingDraft};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for composer operations.
pub type ComposerResult<T> = Result<T, ComposerError>;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Final status reported by the message composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeResult {
    /// The user sent the message.
    Sent,
    /// The user dismissed the composer.
    Cancelled,
    /// The composer failed to send.
    Failed,
}

/// External message-composition surface.
#[async_trait]
pub trait MessageComposer: Send + Sync {
    /// Presents `draft` and resolves once the composer is dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError`] when the composer cannot be presented.
    async fn compose(&self, draft: OutgoingDraft) -> ComposerResult<ComposeResult>;
}

/// The extension host that owns the share activity.
#[async_trait]
pub trait ExtensionHost: Send + Sync {
    /// Shows `notice` and resolves once the user dismisses it.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the alert cannot be shown.
    async fn show_alert(&self, notice: &FailureNotice) -> HostResult<()>;

    /// Tells the host the activity is complete with no output items.
    fn complete_request(&self);
}

/// Errors returned by composer adapters.
#[derive(Debug, Clone, Error)]
pub enum ComposerError {
    /// The device cannot compose messages.
    #[error("message composer unavailable: {0}")]
    Unavailable(String),

    /// Adapter-specific failure.
    #[error("message composer error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ComposerError {
    /// Wraps a runtime error from the composer adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}

/// Errors returned by host adapters.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// There is no surface to present the alert on.
    #[error("no presentation surface available")]
    NoPresentationSurface,

    /// Adapter-specific failure.
    #[error("extension host error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl HostError {
    /// Wraps a runtime error from the host adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
