//! Composition root for a single share activation.

use super::{CancellationSignal, ContentResolver, Delivery, DeliveryResult, OutcomeReporter};
use crate::share::ports::{
    AttachmentReader, ContentItem, ExtensionHost, MessageComposer, RecipientSource, UsageCounter,
};
use mockable::Clock;

/// Resolves shared content once and delivers the outcome to the host.
///
/// Create one activation per share sheet invocation; a finished activation
/// never runs again.
pub struct ShareActivation<R, F, C, H, M, U>
where
    R: RecipientSource,
    F: AttachmentReader,
    C: Clock + Send + Sync,
    H: ExtensionHost,
    M: MessageComposer,
    U: UsageCounter,
{
    resolver: ContentResolver<R, F, C>,
    reporter: OutcomeReporter<H, M, U>,
}

impl<R, F, C, H, M, U> ShareActivation<R, F, C, H, M, U>
where
    R: RecipientSource,
    F: AttachmentReader,
    C: Clock + Send + Sync,
    H: ExtensionHost,
    M: MessageComposer,
    U: UsageCounter,
{
    /// Creates an activation from its resolver and reporter.
    #[must_use]
    pub const fn new(
        resolver: ContentResolver<R, F, C>,
        reporter: OutcomeReporter<H, M, U>,
    ) -> Self {
        Self { resolver, reporter }
    }

    /// Returns the resolver driving this activation.
    #[must_use]
    pub const fn resolver(&self) -> &ContentResolver<R, F, C> {
        &self.resolver
    }

    /// Returns a handle that aborts the running pass.
    #[must_use]
    pub fn cancellation(&self) -> CancellationSignal {
        self.resolver.cancellation()
    }

    /// Aborts the running pass.
    pub fn cancel(&self) {
        self.resolver.cancellation().cancel();
    }

    /// Resolves `items` and delivers the outcome.
    ///
    /// Returns `None` when the activation already ran.
    pub async fn run(&self, items: &[ContentItem]) -> Option<DeliveryResult<Delivery>> {
        let outcome = self.resolver.begin(items).await?;
        Some(self.reporter.deliver(outcome).await)
    }
}
