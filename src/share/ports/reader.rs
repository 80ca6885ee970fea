//! Port for reading file-backed content into memory.

use async_trait::async_trait;
use camino::Utf8Path;
use std::io;

/// Reads the bytes behind a file reference.
#[async_trait]
pub trait AttachmentReader: Send + Sync {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be opened or read.
    async fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>>;
}
