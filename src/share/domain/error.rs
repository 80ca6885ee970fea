//! Error types for share domain construction and parsing.

use super::ResolutionState;
use thiserror::Error;

/// Errors returned while constructing or mutating share domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareDomainError {
    /// The recipient is empty after trimming.
    #[error("message recipient must not be empty")]
    EmptyRecipient,

    /// The resolution state machine rejected a transition.
    #[error("invalid resolution state transition from {from} to {to}")]
    InvalidStateTransition {
        /// The current state.
        from: ResolutionState,
        /// The attempted target state.
        to: ResolutionState,
    },
}

/// Error returned while parsing a type identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown type identifier: {0}")]
pub struct ParseTypeTokenError(pub String);
