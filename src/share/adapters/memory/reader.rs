//! In-memory attachment reader.

use crate::share::ports::AttachmentReader;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

/// Serves file contents from a map keyed by path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttachmentReader {
    files: Arc<RwLock<HashMap<Utf8PathBuf, Vec<u8>>>>,
}

impl InMemoryAttachmentReader {
    /// Creates a reader with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the contents served for `path`.
    #[must_use]
    pub fn with_file(self, path: impl Into<Utf8PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), contents.into());
        }
        self
    }
}

#[async_trait]
impl AttachmentReader for InMemoryAttachmentReader {
    async fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        let files = self
            .files
            .read()
            .map_err(|err| io::Error::other(err.to_string()))?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}")))
    }
}
