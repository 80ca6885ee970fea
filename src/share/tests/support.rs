//! Shared test doubles.

use crate::share::ports::AttachmentReader;
use async_trait::async_trait;
use camino::Utf8Path;
use std::io;

/// An attachment reader whose reads never complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct StalledReader;

#[async_trait]
impl AttachmentReader for StalledReader {
    async fn read(&self, _path: &Utf8Path) -> io::Result<Vec<u8>> {
        std::future::pending().await
    }
}
