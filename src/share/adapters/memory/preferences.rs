//! In-memory preferences store.

use crate::share::ports::{PreferencesError, PreferencesResult, RecipientSource, UsageCounter};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory recipient source and usage counter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    state: Arc<RwLock<PreferencesState>>,
}

#[derive(Debug, Default)]
struct PreferencesState {
    recipient: Option<String>,
    unavailable: bool,
    recipient_reads: usize,
    messages_sent: u64,
}

fn lock_error(err: impl std::fmt::Display) -> PreferencesError {
    PreferencesError::storage(std::io::Error::other(err.to_string()))
}

impl InMemoryPreferences {
    /// Creates preferences with no recipient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates preferences with `recipient` configured.
    #[must_use]
    pub fn with_recipient(recipient: impl Into<String>) -> Self {
        let preferences = Self::new();
        preferences.set_recipient(Some(recipient.into()));
        preferences
    }

    /// Replaces the configured recipient.
    pub fn set_recipient(&self, recipient: Option<String>) {
        if let Ok(mut state) = self.state.write() {
            state.recipient = recipient;
        }
    }

    /// Makes every read fail as if storage could not be reached.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable = unavailable;
        }
    }

    /// Returns how often the recipient was read.
    #[must_use]
    pub fn recipient_reads(&self) -> usize {
        self.state.read().map_or(0, |state| state.recipient_reads)
    }

    /// Returns the number of recorded sent messages.
    #[must_use]
    pub fn messages_sent(&self) -> u64 {
        self.state.read().map_or(0, |state| state.messages_sent)
    }
}

impl RecipientSource for InMemoryPreferences {
    fn message_recipient(&self) -> PreferencesResult<Option<String>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.recipient_reads += 1;
        if state.unavailable {
            return Err(PreferencesError::Unavailable(
                "shared preferences suite could not be opened".to_owned(),
            ));
        }
        Ok(state.recipient.clone())
    }
}

impl UsageCounter for InMemoryPreferences {
    fn record_message_sent(&self) -> PreferencesResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.unavailable {
            return Err(PreferencesError::Unavailable(
                "shared preferences suite could not be opened".to_owned(),
            ));
        }
        state.messages_sent += 1;
        Ok(())
    }
}
