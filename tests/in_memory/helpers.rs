//! Shared test helpers for in-memory share activation tests.

use std::sync::Arc;

use courier::share::{
    adapters::memory::{
        InMemoryAttachmentReader, InMemoryContentProvider, InMemoryExtensionHost,
        InMemoryMessageComposer, InMemoryPreferences,
    },
    config::ShareConfig,
    ports::{ComposeResult, ContentItem, ContentProvider},
    services::{ContentResolver, OutcomeReporter, ShareActivation},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Activation wired entirely to in-memory adapters.
pub type TestActivation = ShareActivation<
    InMemoryPreferences,
    InMemoryAttachmentReader,
    DefaultClock,
    InMemoryExtensionHost,
    InMemoryMessageComposer,
    InMemoryPreferences,
>;

/// In-memory collaborators an activation is built from.
pub struct Collaborators {
    pub preferences: Arc<InMemoryPreferences>,
    pub reader: Arc<InMemoryAttachmentReader>,
    pub host: Arc<InMemoryExtensionHost>,
    pub composer: Arc<InMemoryMessageComposer>,
    pub config: ShareConfig,
}

impl Collaborators {
    /// Builds a fresh activation over these collaborators.
    pub fn activation(&self) -> TestActivation {
        let resolver = ContentResolver::new(
            Arc::clone(&self.preferences),
            Arc::clone(&self.reader),
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

/// Provides collaborators with a configured recipient and a composer that
/// reports every draft as sent.
#[fixture]
pub fn collaborators() -> Collaborators {
    Collaborators {
        preferences: Arc::new(InMemoryPreferences::with_recipient("+15550100")),
        reader: Arc::new(InMemoryAttachmentReader::new()),
        host: Arc::new(InMemoryExtensionHost::new()),
        composer: Arc::new(InMemoryMessageComposer::finishing_with(ComposeResult::Sent)),
        config: ShareConfig::default(),
    }
}

/// Wraps providers into one shared item, in the given order.
pub fn shared_item(providers: impl IntoIterator<Item = InMemoryContentProvider>) -> ContentItem {
    ContentItem::new(
        providers
            .into_iter()
            .map(|provider| Arc::new(provider) as Arc<dyn ContentProvider>),
    )
}
