//! Port for host-supplied shareable content.
//!
//! Providers follow the callback style of platform item providers: `load`
//! receives a [`LoadCompletion`] and resolves it later, from any thread.

use crate::share::domain::{LoadedValue, TypeToken};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::debug;

/// Result type for provider loads.
pub type LoadResult<T> = Result<T, LoadError>;

/// A single shareable payload offered by the host.
pub trait ContentProvider: Send + Sync {
    /// Reports whether the payload can be represented as `token`.
    fn conforms(&self, token: TypeToken) -> bool;

    /// Starts loading the payload as `token`.
    ///
    /// Implementations resolve `completion` exactly once. Dropping it without
    /// resolving is reported to the caller as [`LoadError::Abandoned`].
    fn load(&self, token: TypeToken, completion: LoadCompletion);
}

/// One-shot completion handle passed to [`ContentProvider::load`].
#[derive(Debug)]
pub struct LoadCompletion {
    sender: oneshot::Sender<LoadResult<LoadedValue>>,
}

impl LoadCompletion {
    /// Creates a completion handle and the receiver it resolves.
    #[must_use]
    pub fn channel() -> (Self, oneshot::Receiver<LoadResult<LoadedValue>>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Resolves the load with `result`.
    ///
    /// Results arriving after the waiting side gave up are discarded.
    pub fn complete(self, result: LoadResult<LoadedValue>) {
        if self.sender.send(result).is_err() {
            debug!("load completed after the waiter stopped listening");
        }
    }

    /// Resolves the load with a value.
    pub fn succeed(self, value: LoadedValue) {
        self.complete(Ok(value));
    }

    /// Resolves the load with an error.
    pub fn fail(self, error: LoadError) {
        self.complete(Err(error));
    }
}

/// One unit of shared content and its ordered providers.
#[derive(Clone, Default)]
pub struct ContentItem {
    providers: Vec<Arc<dyn ContentProvider>>,
}

impl ContentItem {
    /// Creates an item from providers in host order.
    #[must_use]
    pub fn new(providers: impl IntoIterator<Item = Arc<dyn ContentProvider>>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    /// Appends a provider.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Returns providers in host order.
    #[must_use]
    pub fn providers(&self) -> &[Arc<dyn ContentProvider>] {
        &self.providers
    }

    /// Returns the number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` when the item has no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentItem")
            .field("providers", &self.providers.len())
            .finish()
    }
}

/// Errors reported by provider loads.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The provider could not produce the requested representation.
    #[error("representation unavailable: {0}")]
    Unavailable(String),

    /// The provider dropped its completion without resolving it.
    #[error("provider abandoned the load without completing it")]
    Abandoned,

    /// Provider-specific failure.
    #[error("provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl LoadError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
