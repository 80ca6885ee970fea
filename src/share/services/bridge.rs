//! Bridges callback-style provider loads into awaited results.

use super::CancellationSignal;
use crate::share::{
    domain::{LoadedValue, TypeToken},
    ports::{ContentProvider, LoadCompletion, LoadError},
};
use std::time::Duration;

/// How a single provider load ended.
#[derive(Debug, Clone)]
pub enum LoadAttempt {
    /// The provider produced a value.
    Loaded(LoadedValue),
    /// The provider reported an error or abandoned the load.
    Failed(LoadError),
    /// The provider did not complete within the timeout.
    TimedOut,
    /// The pass was cancelled while waiting.
    Cancelled,
}

/// Awaits provider completions with a bound and a cancellation escape.
#[derive(Debug, Clone, Copy)]
pub struct AsyncLoadBridge {
    timeout: Duration,
}

impl AsyncLoadBridge {
    /// Creates a bridge that waits at most `timeout` per load.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the per-load timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Starts a load on `provider` and waits for it to finish.
    ///
    /// Cancellation takes precedence over a completion that becomes ready at
    /// the same time.
    pub async fn load(
        &self,
        provider: &dyn ContentProvider,
        token: TypeToken,
        cancellation: &CancellationSignal,
    ) -> LoadAttempt {
        if cancellation.is_cancelled() {
            return LoadAttempt::Cancelled;
        }

        let (completion, receiver) = LoadCompletion::channel();
        provider.load(token, completion);

        tokio::select! {
            biased;
            () = cancellation.cancelled() => LoadAttempt::Cancelled,
            waited = tokio::time::timeout(self.timeout, receiver) => match waited {
                Ok(Ok(Ok(value))) => LoadAttempt::Loaded(value),
                Ok(Ok(Err(error))) => LoadAttempt::Failed(error),
                Ok(Err(_dropped)) => LoadAttempt::Failed(LoadError::Abandoned),
                Err(_elapsed) => LoadAttempt::TimedOut,
            },
        }
    }
}
