//! Scripted in-memory content provider.

use crate::share::{
    domain::{LoadedValue, TypeToken},
    ports::{ContentProvider, LoadCompletion, LoadError, LoadResult},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the provider answers a load for one token.
#[derive(Debug, Clone)]
pub enum ScriptedLoad {
    /// Completes immediately, on the calling thread.
    Complete(LoadResult<LoadedValue>),
    /// Completes from a spawned task after the delay.
    Delayed(Duration, LoadResult<LoadedValue>),
    /// Keeps the completion alive without ever resolving it.
    Hang,
    /// Drops the completion without resolving it.
    Abandon,
}

/// Content provider that conforms to a fixed token list and answers loads
/// from a script.
///
/// Tokens it conforms to but has no script for load as
/// [`LoadedValue::Absent`]. Every `conforms` and `load` call is recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentProvider {
    conforming: Vec<TypeToken>,
    script: HashMap<TypeToken, ScriptedLoad>,
    calls: Arc<Mutex<ProviderCalls>>,
}

#[derive(Debug, Default)]
struct ProviderCalls {
    conforms: Vec<TypeToken>,
    loads: Vec<TypeToken>,
    parked: Vec<LoadCompletion>,
}

impl InMemoryContentProvider {
    /// Creates a provider that conforms to nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that conforms to `tokens` and loads nothing.
    #[must_use]
    pub fn conforming_to(tokens: impl IntoIterator<Item = TypeToken>) -> Self {
        let mut provider = Self::new();
        for token in tokens {
            provider.add_conformance(token);
        }
        provider
    }

    /// Creates a provider offering `value` as `token`.
    #[must_use]
    pub fn offering(token: TypeToken, value: LoadedValue) -> Self {
        Self::new().with_value(token, value)
    }

    /// Creates a plain-text provider.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::offering(TypeToken::Text, LoadedValue::text(text))
    }

    /// Conforms to `token` and loads `value` for it.
    #[must_use]
    pub fn with_value(self, token: TypeToken, value: LoadedValue) -> Self {
        self.with_script(token, ScriptedLoad::Complete(Ok(value)))
    }

    /// Conforms to `token` and fails loads for it with `error`.
    #[must_use]
    pub fn with_error(self, token: TypeToken, error: LoadError) -> Self {
        self.with_script(token, ScriptedLoad::Complete(Err(error)))
    }

    /// Conforms to `token` and answers loads according to `script`.
    #[must_use]
    pub fn with_script(mut self, token: TypeToken, script: ScriptedLoad) -> Self {
        self.add_conformance(token);
        self.script.insert(token, script);
        self
    }

    /// Returns the tokens `conforms` was asked about, in call order.
    #[must_use]
    pub fn conforms_calls(&self) -> Vec<TypeToken> {
        self.calls
            .lock()
            .map(|calls| calls.conforms.clone())
            .unwrap_or_default()
    }

    /// Returns the tokens `load` was called with, in call order.
    #[must_use]
    pub fn load_calls(&self) -> Vec<TypeToken> {
        self.calls
            .lock()
            .map(|calls| calls.loads.clone())
            .unwrap_or_default()
    }

    fn add_conformance(&mut self, token: TypeToken) {
        if !self.conforming.contains(&token) {
            self.conforming.push(token);
        }
    }
}

impl ContentProvider for InMemoryContentProvider {
    fn conforms(&self, token: TypeToken) -> bool {
        if let Ok(mut calls) = self.calls.lock() {
            calls.conforms.push(token);
        }
        self.conforming.contains(&token)
    }

    fn load(&self, token: TypeToken, completion: LoadCompletion) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.loads.push(token);
        }

        let script = self
            .script
            .get(&token)
            .cloned()
            .unwrap_or(ScriptedLoad::Complete(Ok(LoadedValue::Absent)));

        match script {
            ScriptedLoad::Complete(result) => completion.complete(result),
            ScriptedLoad::Delayed(delay, result) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    completion.complete(result);
                });
            }
            ScriptedLoad::Hang => {
                if let Ok(mut calls) = self.calls.lock() {
                    calls.parked.push(completion);
                }
            }
            ScriptedLoad::Abandon => drop(completion),
        }
    }
}
