//! Maps pass results to outcomes and hands them back to the host.

use crate::share::{
    domain::{FailureNotice, FailureReason, OutgoingDraft, ResolutionOutcome},
    ports::{
        ComposeResult, ComposerError, ExtensionHost, HostError, MessageComposer, UsageCounter,
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// How an outcome was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The draft was presented and the composer finished with this result.
    Composed(ComposeResult),
    /// A failure alert was shown and dismissed.
    Alerted(FailureReason),
}

/// Errors raised while delivering an outcome.
///
/// The host request is completed before any of these are returned.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The composer could not be presented.
    #[error(transparent)]
    Composer(#[from] ComposerError),
    /// The failure alert could not be shown.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Result type for outcome delivery.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Maps the result of a pass to its outcome.
///
/// A draft without attachments or body text becomes
/// [`FailureReason::NoSupportedContent`].
#[must_use]
pub fn finish(result: Result<OutgoingDraft, FailureReason>) -> ResolutionOutcome {
    match result {
        Ok(draft) if draft.has_content() => ResolutionOutcome::Success(draft),
        Ok(_) => ResolutionOutcome::Failure(FailureReason::NoSupportedContent),
        Err(reason) => ResolutionOutcome::Failure(reason),
    }
}

/// The single seam between a finished pass and the host.
pub struct OutcomeReporter<H, M, U>
where
    H: ExtensionHost,
    M: MessageComposer,
    U: UsageCounter,
{
    host: Arc<H>,
    composer: Arc<M>,
    usage: Arc<U>,
    display_name: String,
}

impl<H, M, U> OutcomeReporter<H, M, U>
where
    H: ExtensionHost,
    M: MessageComposer,
    U: UsageCounter,
{
    /// Creates a reporter wired to the host collaborators.
    #[must_use]
    pub fn new(
        host: Arc<H>,
        composer: Arc<M>,
        usage: Arc<U>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            host,
            composer,
            usage,
            display_name: display_name.into(),
        }
    }

    /// Hands `outcome` to the composer or shows its failure alert.
    ///
    /// The host request is completed exactly once on every path. A message
    /// the composer reports as sent increments the usage counter once.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the composer or alert could not be
    /// presented.
    pub async fn deliver(&self, outcome: ResolutionOutcome) -> DeliveryResult<Delivery> {
        let delivered = match outcome {
            ResolutionOutcome::Success(draft) => self.compose(draft).await,
            ResolutionOutcome::Failure(reason) => self.alert(reason).await,
        };
        self.host.complete_request();
        delivered
    }

    async fn compose(&self, draft: OutgoingDraft) -> DeliveryResult<Delivery> {
        let draft_id = draft.id();
        let result = self.composer.compose(draft).await?;
        info!(%draft_id, ?result, "composer finished");

        if result == ComposeResult::Sent {
            if let Err(error) = self.usage.record_message_sent() {
                warn!(%draft_id, %error, "could not record sent message");
            }
        }
        Ok(Delivery::Composed(result))
    }

    async fn alert(&self, reason: FailureReason) -> DeliveryResult<Delivery> {
        let notice = FailureNotice::for_reason(reason, self.display_name.clone());
        self.host.show_alert(&notice).await?;
        Ok(Delivery::Alerted(reason))
    }
}
