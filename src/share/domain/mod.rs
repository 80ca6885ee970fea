//! Domain model for share-extension content resolution.
//!
//! The domain covers type negotiation, the values providers hand back, and
//! the draft a pass assembles. It has no knowledge of how content is loaded
//! or where the draft goes afterwards.

mod attachment;
mod draft;
mod error;
mod ids;
mod loaded;
mod outcome;
mod priority;
mod recipient;
mod type_token;

pub use attachment::{Attachment, AttachmentPayload};
pub use draft::OutgoingDraft;
pub use error::{ParseTypeTokenError, ShareDomainError};
pub use ids::{ActivationId, DraftId};
pub use loaded::LoadedValue;
pub use outcome::{FailureNotice, FailureReason, ResolutionOutcome, ResolutionState};
pub use priority::TypePriorityTable;
pub use recipient::{Recipient, RecipientKind};
pub use type_token::{TypeFamily, TypeToken};
