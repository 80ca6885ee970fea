//! Attachments carried by an outgoing draft.

use super::TypeToken;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// The content of an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttachmentPayload {
    /// The composer reads the file itself.
    FileReference(Utf8PathBuf),
    /// The bytes were read up front.
    Bytes(Vec<u8>),
}

/// A single attachment on an outgoing draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    payload: AttachmentPayload,
    type_token: TypeToken,
    filename: String,
}

impl Attachment {
    /// Creates an attachment that references a file path.
    #[must_use]
    pub fn file_reference(
        path: impl Into<Utf8PathBuf>,
        type_token: TypeToken,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            payload: AttachmentPayload::FileReference(path.into()),
            type_token,
            filename: filename.into(),
        }
    }

    /// Creates an attachment from bytes.
    #[must_use]
    pub fn bytes(bytes: Vec<u8>, type_token: TypeToken, filename: impl Into<String>) -> Self {
        Self {
            payload: AttachmentPayload::Bytes(bytes),
            type_token,
            filename: filename.into(),
        }
    }

    /// Returns the attachment payload.
    #[must_use]
    pub const fn payload(&self) -> &AttachmentPayload {
        &self.payload
    }

    /// Returns the token the content was negotiated under.
    #[must_use]
    pub const fn type_token(&self) -> TypeToken {
        self.type_token
    }

    /// Returns the filename presented to the composer.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the referenced path when the payload is a file reference.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match &self.payload {
            AttachmentPayload::FileReference(path) => Some(path.as_path()),
            AttachmentPayload::Bytes(_) => None,
        }
    }

    /// Returns the bytes when the payload was read up front.
    #[must_use]
    pub fn data(&self) -> Option<&[u8]> {
        match &self.payload {
            AttachmentPayload::FileReference(_) => None,
            AttachmentPayload::Bytes(bytes) => Some(bytes.as_slice()),
        }
    }
}
