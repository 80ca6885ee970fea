//! Recording host and composer adapters.

use crate::share::{
    domain::{FailureNotice, OutgoingDraft},
    ports::{
        ComposeResult, ComposerError, ComposerResult, ExtensionHost, HostError, HostResult,
        MessageComposer,
    },
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Extension host that records alerts and completions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExtensionHost {
    state: Arc<RwLock<HostState>>,
}

#[derive(Debug, Default)]
struct HostState {
    alerts: Vec<FailureNotice>,
    completions: usize,
    headless: bool,
}

impl InMemoryExtensionHost {
    /// Creates a host that accepts alerts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes alert presentation fail as if no view were available.
    pub fn set_headless(&self, headless: bool) {
        if let Ok(mut state) = self.state.write() {
            state.headless = headless;
        }
    }

    /// Returns every alert shown so far.
    #[must_use]
    pub fn alerts(&self) -> Vec<FailureNotice> {
        self.state
            .read()
            .map(|state| state.alerts.clone())
            .unwrap_or_default()
    }

    /// Returns how many times the request was completed.
    #[must_use]
    pub fn completions(&self) -> usize {
        self.state.read().map_or(0, |state| state.completions)
    }
}

#[async_trait]
impl ExtensionHost for InMemoryExtensionHost {
    async fn show_alert(&self, notice: &FailureNotice) -> HostResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| HostError::runtime(std::io::Error::other(err.to_string())))?;
        if state.headless {
            return Err(HostError::NoPresentationSurface);
        }
        state.alerts.push(notice.clone());
        Ok(())
    }

    fn complete_request(&self) {
        if let Ok(mut state) = self.state.write() {
            state.completions += 1;
        }
    }
}

/// Message composer that records drafts and finishes with a fixed result.
#[derive(Debug, Clone)]
pub struct InMemoryMessageComposer {
    result: ComposeResult,
    state: Arc<RwLock<ComposerState>>,
}

#[derive(Debug, Default)]
struct ComposerState {
    drafts: Vec<OutgoingDraft>,
    unavailable: bool,
}

impl InMemoryMessageComposer {
    /// Creates a composer that finishes every draft with `result`.
    #[must_use]
    pub fn finishing_with(result: ComposeResult) -> Self {
        Self {
            result,
            state: Arc::default(),
        }
    }

    /// Makes presentation fail as if the device could not send messages.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable = unavailable;
        }
    }

    /// Returns every draft presented so far.
    #[must_use]
    pub fn drafts(&self) -> Vec<OutgoingDraft> {
        self.state
            .read()
            .map(|state| state.drafts.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryMessageComposer {
    fn default() -> Self {
        Self::finishing_with(ComposeResult::Sent)
    }
}

#[async_trait]
impl MessageComposer for InMemoryMessageComposer {
    async fn compose(&self, draft: OutgoingDraft) -> ComposerResult<ComposeResult> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ComposerError::runtime(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(ComposerError::Unavailable(
                "this device cannot send messages".to_owned(),
            ));
        }
        state.drafts.push(draft);
        Ok(self.result)
    }
}
