//! Share-extension content resolution.
//!
//! When the user shares content to the extension, the host hands over an
//! ordered set of items, each offering one or more providers. A
//! [`services::ContentResolver`] negotiates one representation per provider
//! against [`domain::TypePriorityTable`], loads it through
//! [`services::AsyncLoadBridge`], and lets [`services::AttachmentAssembler`]
//! fold it into an [`domain::OutgoingDraft`] for the pre-selected recipient.
//! [`services::OutcomeReporter`] then hands the draft to the message
//! composer, or shows the user why nothing could be shared.
//!
//! # Architecture
//!
//! - **Domain**: type tokens, loaded values, drafts and outcomes ([`domain`])
//! - **Ports**: providers, preferences, file access, composer and host ([`ports`])
//! - **Adapters**: in-memory doubles and a `cap-std` file reader ([`adapters`])
//! - **Services**: the resolution pass and outcome delivery ([`services`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use courier::share::{
//!     adapters::memory::{InMemoryAttachmentReader, InMemoryContentProvider, InMemoryPreferences},
//!     config::ShareConfig,
//!     domain::ResolutionOutcome,
//!     ports::ContentItem,
//!     services::ContentResolver,
//! };
//! use mockable::DefaultClock;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = ContentResolver::new(
//!     Arc::new(InMemoryPreferences::with_recipient("+15550100")),
//!     Arc::new(InMemoryAttachmentReader::new()),
//!     Arc::new(DefaultClock),
//!     &ShareConfig::default(),
//! );
//! let items = vec![ContentItem::default().with_provider(Arc::new(InMemoryContentProvider::text("  hello  ")))];
//!
//! let outcome = resolver.begin(&items).await;
//! let Some(ResolutionOutcome::Success(draft)) = outcome else {
//!     panic!("expected a draft");
//! };
//! assert_eq!(draft.body(), Some("hello"));
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
