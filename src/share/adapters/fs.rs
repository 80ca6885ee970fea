//! Filesystem adapter for reading attachment data.

use crate::share::ports::AttachmentReader;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Reads attachment files through `cap-std`.
///
/// Each read opens the file's parent directory with ambient authority and
/// reads the file relative to it, on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapStdAttachmentReader;

impl CapStdAttachmentReader {
    /// Creates a reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("path has no file name: {path}")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

fn read_file(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let (dir, file_name) = open_parent_dir(path)?;
    dir.read(file_name)
}

#[async_trait]
impl AttachmentReader for CapStdAttachmentReader {
    async fn read(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        let owned: Utf8PathBuf = path.to_owned();
        tokio::task::spawn_blocking(move || read_file(&owned))
            .await
            .map_err(io::Error::other)?
    }
}
