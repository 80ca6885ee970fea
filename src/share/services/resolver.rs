//! Single-shot resolution pass over host-supplied content.

use super::{AsyncLoadBridge, AttachmentAssembler, CancellationSignal, LoadAttempt, reporter};
use crate::share::{
    config::ShareConfig,
    domain::{
        ActivationId, FailureReason, OutgoingDraft, Recipient, ResolutionOutcome, ResolutionState,
        TypePriorityTable,
    },
    ports::{AttachmentReader, ContentItem, RecipientSource},
};
use mockable::Clock;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Drives one resolution pass for a share activation.
///
/// A resolver serves exactly one activation. Its first call to
/// [`ContentResolver::begin`] runs the pass; every later or concurrent call
/// returns `None` without touching the recipient source or any provider.
///
/// Providers are handled strictly in host order, one at a time, so the
/// draft's contents follow the order the host supplied them in.
pub struct ContentResolver<R, F, C>
where
    R: RecipientSource,
    F: AttachmentReader,
    C: Clock + Send + Sync,
{
    activation_id: ActivationId,
    recipients: Arc<R>,
    assembler: AttachmentAssembler<F>,
    bridge: AsyncLoadBridge,
    clock: Arc<C>,
    cancellation: CancellationSignal,
    state: Mutex<ResolutionState>,
}

impl<R, F, C> ContentResolver<R, F, C>
where
    R: RecipientSource,
    F: AttachmentReader,
    C: Clock + Send + Sync,
{
    /// Creates a resolver for a new activation.
    #[must_use]
    pub fn new(recipients: Arc<R>, reader: Arc<F>, clock: Arc<C>, config: &ShareConfig) -> Self {
        Self {
            activation_id: ActivationId::new(),
            recipients,
            assembler: AttachmentAssembler::new(reader, config.load_timeout()),
            bridge: AsyncLoadBridge::new(config.load_timeout()),
            clock,
            cancellation: CancellationSignal::new(),
            state: Mutex::new(ResolutionState::Idle),
        }
    }

    /// Returns the activation identifier used in logs.
    #[must_use]
    pub const fn activation_id(&self) -> ActivationId {
        self.activation_id
    }

    /// Returns a handle that aborts the pass when cancelled.
    #[must_use]
    pub fn cancellation(&self) -> CancellationSignal {
        self.cancellation.clone()
    }

    /// Returns the current state of the pass.
    ///
    /// A poisoned state lock reads as [`ResolutionState::Failed`].
    #[must_use]
    pub fn state(&self) -> ResolutionState {
        self.state
            .lock()
            .map_or(ResolutionState::Failed, |state| *state)
    }

    /// Runs the resolution pass over `items`.
    ///
    /// Returns `None` when a pass was already started for this activation.
    pub async fn begin(&self, items: &[ContentItem]) -> Option<ResolutionOutcome> {
        if !self.try_start() {
            debug!(activation_id = %self.activation_id, "resolution pass already started");
            return None;
        }

        info!(
            activation_id = %self.activation_id,
            items = items.len(),
            "starting resolution pass"
        );
        let result = self.resolve(items).await;
        let outcome = reporter::finish(result);
        self.settle(outcome.state());

        match &outcome {
            ResolutionOutcome::Success(draft) => info!(
                activation_id = %self.activation_id,
                draft_id = %draft.id(),
                attachments = draft.attachments().len(),
                has_body = draft.body().is_some(),
                "resolution pass succeeded"
            ),
            ResolutionOutcome::Failure(reason) => info!(
                activation_id = %self.activation_id,
                %reason,
                "resolution pass failed"
            ),
        }
        Some(outcome)
    }

    /// Runs [`ContentResolver::begin`] on a tokio worker task.
    pub fn spawn(self: Arc<Self>, items: Vec<ContentItem>) -> JoinHandle<Option<ResolutionOutcome>>
    where
        R: 'static,
        F: 'static,
        C: 'static,
    {
        tokio::spawn(async move { self.begin(&items).await })
    }

    async fn resolve(&self, items: &[ContentItem]) -> Result<OutgoingDraft, FailureReason> {
        let recipient = self.resolve_recipient()?;
        let mut draft = OutgoingDraft::new(recipient, &*self.clock);

        for (item_index, item) in items.iter().enumerate() {
            for (provider_index, provider) in item.providers().iter().enumerate() {
                if self.cancellation.is_cancelled() {
                    return Err(FailureReason::Cancelled);
                }

                let Some(token) = TypePriorityTable::first_match(|token| provider.conforms(token))
                else {
                    debug!(
                        activation_id = %self.activation_id,
                        item = item_index,
                        provider = provider_index,
                        "provider offers no supported representation"
                    );
                    continue;
                };

                debug!(
                    activation_id = %self.activation_id,
                    item = item_index,
                    provider = provider_index,
                    %token,
                    "loading provider content"
                );
                match self
                    .bridge
                    .load(provider.as_ref(), token, &self.cancellation)
                    .await
                {
                    LoadAttempt::Loaded(value) => {
                        let kind = value.kind();
                        let contribution = self
                            .assembler
                            .append(&mut draft, token, value, &self.cancellation)
                            .await?;
                        debug!(
                            activation_id = %self.activation_id,
                            item = item_index,
                            provider = provider_index,
                            %token,
                            value = kind,
                            contribution = contribution.as_str(),
                            "provider content processed"
                        );
                    }
                    LoadAttempt::Failed(error) => warn!(
                        activation_id = %self.activation_id,
                        item = item_index,
                        provider = provider_index,
                        %token,
                        %error,
                        "provider load failed"
                    ),
                    LoadAttempt::TimedOut => warn!(
                        activation_id = %self.activation_id,
                        item = item_index,
                        provider = provider_index,
                        %token,
                        timeout_ms = u64::try_from(self.bridge.timeout().as_millis()).unwrap_or(u64::MAX),
                        "provider load timed out"
                    ),
                    LoadAttempt::Cancelled => return Err(FailureReason::Cancelled),
                }
            }
        }

        Ok(draft)
    }

    fn resolve_recipient(&self) -> Result<Recipient, FailureReason> {
        let configured = self.recipients.message_recipient().map_err(|error| {
            warn!(activation_id = %self.activation_id, %error, "could not read preferences");
            FailureReason::PreferencesUnavailable
        })?;

        configured
            .and_then(|value| Recipient::new(value).ok())
            .ok_or(FailureReason::NoRecipientConfigured)
    }

    fn try_start(&self) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        match state.transition_to(ResolutionState::Resolving) {
            Ok(next) => {
                *state = next;
                true
            }
            Err(_) => false,
        }
    }

    fn settle(&self, terminal: ResolutionState) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        match state.transition_to(terminal) {
            Ok(next) => *state = next,
            Err(error) => warn!(activation_id = %self.activation_id, %error, "state not updated"),
        }
    }
}
