//! Validated message recipient.

use super::ShareDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of address a recipient string holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientKind {
    /// A phone number.
    PhoneNumber,
    /// An e-mail address.
    EmailAddress,
}

/// The single pre-selected recipient for outgoing drafts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Recipient(String);

impl Recipient {
    /// Creates a recipient from a preference value.
    ///
    /// # Errors
    ///
    /// Returns [`ShareDomainError::EmptyRecipient`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ShareDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ShareDomainError::EmptyRecipient);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the recipient as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reports whether this is a phone number or an e-mail address.
    #[must_use]
    pub fn kind(&self) -> RecipientKind {
        if self.0.contains('@') {
            RecipientKind::EmailAddress
        } else {
            RecipientKind::PhoneNumber
        }
    }
}

impl TryFrom<String> for Recipient {
    type Error = ShareDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Recipient> for String {
    fn from(recipient: Recipient) -> Self {
        recipient.0
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
