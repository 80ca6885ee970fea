//! Outgoing message draft assembled by one resolution pass.

use super::{Attachment, DraftId, Recipient};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Recipient, body text and attachments for the external composer.
///
/// A draft starts empty and only grows. Body fragments are trimmed and joined
/// with a single space, so the body never has leading or trailing whitespace.
///
/// # Examples
///
/// ```
/// use courier::share::domain::{OutgoingDraft, Recipient};
/// use mockable::DefaultClock;
///
/// let recipient = Recipient::new("+15550100").expect("valid recipient");
/// let mut draft = OutgoingDraft::new(recipient, &DefaultClock);
/// draft.append_body_fragment("  hi ");
/// draft.append_body_fragment("\nthere");
/// assert_eq!(draft.body(), Some("hi there"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingDraft {
    id: DraftId,
    recipient: Recipient,
    body: Option<String>,
    attachments: Vec<Attachment>,
    created_at: DateTime<Utc>,
}

impl OutgoingDraft {
    /// Creates an empty draft addressed to `recipient`.
    #[must_use]
    pub fn new(recipient: Recipient, clock: &impl Clock) -> Self {
        Self {
            id: DraftId::new(),
            recipient,
            body: None,
            attachments: Vec::new(),
            created_at: clock.utc(),
        }
    }

    /// Returns the draft identifier.
    #[must_use]
    pub const fn id(&self) -> DraftId {
        self.id
    }

    /// Returns the recipient.
    #[must_use]
    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Returns the body text, if any fragment was appended.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns attachments in the order they were appended.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the draft has an attachment or non-empty body.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.attachments.is_empty() || self.body.as_deref().is_some_and(|body| !body.is_empty())
    }

    /// Appends an attachment.
    pub fn push_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Appends a text fragment to the body.
    ///
    /// Returns `false` when the fragment is empty after trimming and was
    /// discarded.
    pub fn append_body_fragment(&mut self, fragment: &str) -> bool {
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            return false;
        }

        match self.body.as_mut() {
            Some(body) if !body.is_empty() => {
                body.push(' ');
                body.push_str(trimmed);
            }
            _ => self.body = Some(trimmed.to_owned()),
        }
        true
    }
}
