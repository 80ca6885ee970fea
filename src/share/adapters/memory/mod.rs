//! In-memory adapters for the share ports.
//!
//! These adapters hold everything in process memory and record how they
//! were called, which makes them suitable for deterministic tests and local
//! wiring. None of them persist anything.

mod host;
mod preferences;
mod provider;
mod reader;

pub use host::{InMemoryExtensionHost, InMemoryMessageComposer};
pub use preferences::InMemoryPreferences;
pub use provider::{InMemoryContentProvider, ScriptedLoad};
pub use reader::InMemoryAttachmentReader;
