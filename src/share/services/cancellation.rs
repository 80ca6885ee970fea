//! Cooperative cancellation for resolution passes.

use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle the host uses to abort a running pass.
///
/// All clones observe the same flag. Once cancelled, a signal stays
/// cancelled.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    sender: Arc<watch::Sender<bool>>,
}

impl CancellationSignal {
    /// Creates a signal that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns `true` once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once cancellation is requested.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so the wait only ends on cancel.
        let _observed = receiver.wait_for(|cancelled| *cancelled).await.is_ok();
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}
