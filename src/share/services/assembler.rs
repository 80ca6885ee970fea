//! Classifies loaded values and appends them to the draft.

use super::CancellationSignal;
use crate::share::{
    domain::{Attachment, FailureReason, LoadedValue, OutgoingDraft, TypeToken},
    ports::AttachmentReader,
};
use camino::Utf8Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// What a single provider added to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contribution {
    /// An attachment was appended.
    Attachment,
    /// A text fragment was appended to the body.
    BodyFragment,
    /// The value was empty, unusable or dropped.
    Nothing,
}

impl Contribution {
    /// Returns `true` unless nothing was added.
    #[must_use]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::Nothing)
    }

    /// Returns a short label, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attachment => "attachment",
            Self::BodyFragment => "body_fragment",
            Self::Nothing => "nothing",
        }
    }
}

/// Turns loaded values into attachments and body text.
///
/// Image files are read into memory and attached as bytes, because some
/// composers preview path-referenced images as blank frames. Every other
/// file stays a path reference to keep memory use low. Image reads share
/// the per-load timeout and stop as soon as the pass is cancelled.
pub struct AttachmentAssembler<F>
where
    F: AttachmentReader,
{
    reader: Arc<F>,
    read_timeout: Duration,
}

impl<F> Clone for AttachmentAssembler<F>
where
    F: AttachmentReader,
{
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            read_timeout: self.read_timeout,
        }
    }
}

impl<F> AttachmentAssembler<F>
where
    F: AttachmentReader,
{
    /// Creates an assembler that reads image files through `reader`, waiting
    /// at most `read_timeout` per file.
    #[must_use]
    pub const fn new(reader: Arc<F>, read_timeout: Duration) -> Self {
        Self {
            reader,
            read_timeout,
        }
    }

    /// Appends `value`, negotiated as `token`, to `draft`.
    ///
    /// Values that cannot be used are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FailureReason::Cancelled`] when `cancellation` fires while
    /// image data is being read. The draft is left untouched in that case.
    pub async fn append(
        &self,
        draft: &mut OutgoingDraft,
        token: TypeToken,
        value: LoadedValue,
        cancellation: &CancellationSignal,
    ) -> Result<Contribution, FailureReason> {
        let contribution = match value {
            LoadedValue::FileReference {
                path,
                suggested_name,
            } => {
                let filename = file_reference_name(&path, suggested_name, token);
                let attachment = if token.is_image() {
                    self.read_image(path.as_path(), token, filename, cancellation)
                        .await?
                } else {
                    Attachment::file_reference(path, token, filename)
                };
                draft.push_attachment(attachment);
                Contribution::Attachment
            }
            LoadedValue::Url(text) | LoadedValue::Text(text) => {
                if draft.append_body_fragment(&text) {
                    Contribution::BodyFragment
                } else {
                    debug!(%token, "discarding blank text fragment");
                    Contribution::Nothing
                }
            }
            LoadedValue::RawBytes {
                bytes,
                suggested_name,
                suggested_extension,
            } => {
                let Some(filename) = raw_bytes_name(suggested_name, suggested_extension, token)
                else {
                    warn!(%token, len = bytes.len(), "dropping data without a known extension");
                    return Ok(Contribution::Nothing);
                };
                draft.push_attachment(Attachment::bytes(bytes, token, filename));
                Contribution::Attachment
            }
            LoadedValue::Absent => {
                debug!(%token, "provider produced nothing to attach");
                Contribution::Nothing
            }
        };
        Ok(contribution)
    }

    async fn read_image(
        &self,
        path: &Utf8Path,
        token: TypeToken,
        filename: String,
        cancellation: &CancellationSignal,
    ) -> Result<Attachment, FailureReason> {
        if cancellation.is_cancelled() {
            return Err(FailureReason::Cancelled);
        }

        tokio::select! {
            biased;
            () = cancellation.cancelled() => Err(FailureReason::Cancelled),
            read = tokio::time::timeout(self.read_timeout, self.reader.read(path)) => {
                Ok(match read {
                    Ok(Ok(bytes)) => Attachment::bytes(bytes, token, filename),
                    Ok(Err(err)) => {
                        warn!(%token, %path, error = %err, "could not read image data, attaching by path");
                        Attachment::file_reference(path, token, filename)
                    }
                    Err(_elapsed) => {
                        warn!(%token, %path, "timed out reading image data, attaching by path");
                        Attachment::file_reference(path, token, filename)
                    }
                })
            }
        }
    }
}

fn file_reference_name(
    path: &Utf8Path,
    suggested_name: Option<String>,
    token: TypeToken,
) -> String {
    suggested_name
        .filter(|name| !name.trim().is_empty())
        .or_else(|| path.file_name().map(ToOwned::to_owned))
        .unwrap_or_else(|| synthesized_name(token.canonical_extension()))
}

fn raw_bytes_name(
    suggested_name: Option<String>,
    suggested_extension: Option<String>,
    token: TypeToken,
) -> Option<String> {
    if let Some(name) = suggested_name.filter(|name| !name.trim().is_empty()) {
        return Some(name);
    }

    suggested_extension
        .as_deref()
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .or_else(|| token.canonical_extension())
        .map(|ext| format!("attachment.{ext}"))
}

fn synthesized_name(extension: Option<&str>) -> String {
    extension.map_or_else(|| "attachment".to_owned(), |ext| format!("attachment.{ext}"))
}
