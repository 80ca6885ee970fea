//! Pass-level results, failure reasons and the resolution state machine.

use super::{OutgoingDraft, ShareDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a resolution pass produced no draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The preferences collaborator could not be reached.
    PreferencesUnavailable,
    /// Preferences were reachable but no recipient is set.
    NoRecipientConfigured,
    /// Every provider was unmatched, failed, timed out, or produced nothing.
    NoSupportedContent,
    /// The host aborted the share before the pass finished.
    Cancelled,
}

impl FailureReason {
    /// Returns the canonical name of the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreferencesUnavailable => "preferences_unavailable",
            Self::NoRecipientConfigured => "no_recipient_configured",
            Self::NoSupportedContent => "no_supported_content",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the message shown to the user for this reason.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::PreferencesUnavailable => {
                "Something went wrong while loading your preferences. Have another go in a minute or two."
            }
            Self::NoRecipientConfigured => {
                "There's no recipient for messages selected in your preferences. You need to set it up in the app before using this extension."
            }
            Self::NoSupportedContent => {
                "Either no items were available to share, or they're not supported. Sorry!"
            }
            Self::Cancelled => "Sharing was cancelled before your message was ready.",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single alert shown to the user when a pass fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureNotice {
    /// Alert title, normally the extension's display name.
    pub title: String,
    /// Alert body, mapped from the failure reason.
    pub message: String,
}

impl FailureNotice {
    /// Builds the notice for `reason`.
    #[must_use]
    pub fn for_reason(reason: FailureReason, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: reason.user_message().to_owned(),
        }
    }
}

/// The result of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// A draft with at least one attachment or body fragment.
    Success(OutgoingDraft),
    /// No draft could be produced.
    Failure(FailureReason),
}

impl ResolutionOutcome {
    /// Returns `true` for [`ResolutionOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the draft on success.
    #[must_use]
    pub const fn draft(&self) -> Option<&OutgoingDraft> {
        match self {
            Self::Success(draft) => Some(draft),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure reason on failure.
    #[must_use]
    pub const fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(*reason),
        }
    }

    /// Returns the terminal state this outcome corresponds to.
    #[must_use]
    pub const fn state(&self) -> ResolutionState {
        match self {
            Self::Success(_) => ResolutionState::Succeeded,
            Self::Failure(_) => ResolutionState::Failed,
        }
    }
}

/// Lifecycle of a single activation's resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// No pass has started.
    Idle,
    /// A pass is running.
    Resolving,
    /// The pass produced a draft.
    Succeeded,
    /// The pass produced a failure.
    Failed,
}

impl ResolutionState {
    /// Returns `true` if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Returns `true` when moving to `next` is permitted.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Resolving)
                | (Self::Resolving, Self::Succeeded | Self::Failed)
        )
    }

    /// Returns the state `next` if the transition is permitted.
    ///
    /// # Errors
    ///
    /// Returns [`ShareDomainError::InvalidStateTransition`] otherwise.
    pub const fn transition_to(self, next: Self) -> Result<Self, ShareDomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ShareDomainError::InvalidStateTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Returns the state as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
