//! Values produced by a content provider load.

use camino::Utf8PathBuf;

/// The shape of a value handed back by a provider load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedValue {
    /// A file on disk.
    FileReference {
        /// Location of the file.
        path: Utf8PathBuf,
        /// Filename the host suggested for the file.
        suggested_name: Option<String>,
    },
    /// A link that does not point at a local file.
    Url(String),
    /// Plain text.
    Text(String),
    /// An in-memory blob.
    RawBytes {
        /// The payload.
        bytes: Vec<u8>,
        /// Filename the host suggested for the blob.
        suggested_name: Option<String>,
        /// Extension the host suggested for the blob.
        suggested_extension: Option<String>,
    },
    /// The load produced nothing usable.
    Absent,
}

impl LoadedValue {
    /// Creates a file reference without a suggested name.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::FileReference {
            path: path.into(),
            suggested_name: None,
        }
    }

    /// Creates a file reference with a suggested name.
    #[must_use]
    pub fn named_file(path: impl Into<Utf8PathBuf>, suggested_name: impl Into<String>) -> Self {
        Self::FileReference {
            path: path.into(),
            suggested_name: Some(suggested_name.into()),
        }
    }

    /// Creates a text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a link value.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Creates an unnamed blob.
    #[must_use]
    pub const fn bytes(bytes: Vec<u8>) -> Self {
        Self::RawBytes {
            bytes,
            suggested_name: None,
            suggested_extension: None,
        }
    }

    /// Returns a short label for the value shape, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FileReference { .. } => "file_reference",
            Self::Url(_) => "url",
            Self::Text(_) => "text",
            Self::RawBytes { .. } => "raw_bytes",
            Self::Absent => "absent",
        }
    }
}
