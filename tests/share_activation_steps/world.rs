//! Shared world state for share activation BDD scenarios.

use std::sync::Arc;

use courier::share::{
    adapters::memory::{
        InMemoryAttachmentReader, InMemoryExtensionHost, InMemoryMessageComposer,
        InMemoryPreferences,
    },
    config::ShareConfig,
    ports::{ComposeResult, ContentItem},
    services::{ContentResolver, Delivery, DeliveryResult, OutcomeReporter, ShareActivation},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Activation type used by the BDD world.
pub type TestActivation = ShareActivation<
    InMemoryPreferences,
    InMemoryAttachmentReader,
    DefaultClock,
    InMemoryExtensionHost,
    InMemoryMessageComposer,
    InMemoryPreferences,
>;

/// Scenario world for share activation behaviour tests.
pub struct ShareWorld {
    pub config: ShareConfig,
    pub preferences: Arc<InMemoryPreferences>,
    pub reader: InMemoryAttachmentReader,
    pub host: Arc<InMemoryExtensionHost>,
    pub composer: Arc<InMemoryMessageComposer>,
    pub items: Vec<ContentItem>,
    pub activation: Option<TestActivation>,
    pub first_run: Option<DeliveryResult<Delivery>>,
    pub second_run_ignored: Option<bool>,
}

impl ShareWorld {
    /// Creates a world with no recipient and nothing shared.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ShareConfig::default(),
            preferences: Arc::new(InMemoryPreferences::new()),
            reader: InMemoryAttachmentReader::new(),
            host: Arc::new(InMemoryExtensionHost::new()),
            composer: Arc::new(InMemoryMessageComposer::finishing_with(ComposeResult::Sent)),
            items: Vec::new(),
            activation: None,
            first_run: None,
            second_run_ignored: None,
        }
    }

    /// Builds the activation from the collaborators configured so far.
    pub fn build_activation(&self) -> TestActivation {
        let resolver = ContentResolver::new(
            Arc::clone(&self.preferences),
            Arc::new(self.reader.clone()),
            Arc::new(DefaultClock),
            &self.config,
        );
        let reporter = OutcomeReporter::new(
            Arc::clone(&self.host),
            Arc::clone(&self.composer),
            Arc::clone(&self.preferences),
            self.config.display_name.clone(),
        );
        ShareActivation::new(resolver, reporter)
    }
}

impl Default for ShareWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[fixture]
pub fn world() -> ShareWorld {
    ShareWorld::new()
}

pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
