//! Port trait definitions for the share subsystem.
//!
//! Ports are the boundaries to collaborators the share pipeline does not
//! own: the host's content providers, preferences, file access, the message
//! composer and the extension host.

pub mod composer;
pub mod content;
pub mod preferences;
pub mod reader;

pub use composer::{
    ComposeResult, ComposerError, ComposerResult, ExtensionHost, HostError, HostResult,
    MessageComposer,
};
pub use content::{ContentItem, ContentProvider, LoadCompletion, LoadError, LoadResult};
pub use preferences::{PreferencesError, PreferencesResult, RecipientSource, UsageCounter};
pub use reader::AttachmentReader;
