//! Closed set of content categories the share pipeline can negotiate.

use super::ParseTypeTokenError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category a [`TypeToken`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFamily {
    /// A reference to a file on disk.
    FileReference,
    /// A non-file link.
    Link,
    /// Still images.
    Image,
    /// Video and audio content.
    Audiovisual,
    /// Plain text.
    Text,
    /// Documents such as PDF or RTFD bundles.
    Document,
    /// Contact cards.
    ContactCard,
}

impl TypeFamily {
    /// Returns the family name in canonical form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileReference => "file_reference",
            Self::Link => "link",
            Self::Image => "image",
            Self::Audiovisual => "audiovisual",
            Self::Text => "text",
            Self::Document => "document",
            Self::ContactCard => "contact_card",
        }
    }
}

impl fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recognised content category offered by a content provider.
///
/// Concrete formats sit next to the umbrella category they belong to, e.g.
/// [`TypeToken::Png`] and [`TypeToken::Image`]. The order in which tokens are
/// tried lives in [`super::TypePriorityTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeToken {
    /// `public.file-url`
    FileUrl,
    /// `public.url`
    Url,
    /// `public.jpeg`
    Jpeg,
    /// `public.jpeg-2000`
    Jpeg2000,
    /// `public.tiff`
    Tiff,
    /// `com.apple.pict`
    Pict,
    /// `com.compuserve.gif`
    Gif,
    /// `public.png`
    Png,
    /// `com.apple.quicktime-image`
    QuickTimeImage,
    /// `com.apple.icns`
    AppleIcns,
    /// `com.microsoft.bmp`
    Bmp,
    /// `com.microsoft.ico`
    Ico,
    /// `public.image`
    Image,
    /// `com.apple.quicktime-movie`
    QuickTimeMovie,
    /// `public.mpeg`
    Mpeg,
    /// `public.mpeg-4`
    Mpeg4,
    /// `public.mp3`
    Mp3,
    /// `public.mpeg-4-audio`
    Mpeg4Audio,
    /// `com.apple.protected-mpeg-4-audio`
    AppleProtectedMpeg4Audio,
    /// `public.audiovisual-content`
    AudiovisualContent,
    /// `public.text`
    Text,
    /// `com.adobe.pdf`
    Pdf,
    /// `com.apple.rtfd`
    Rtfd,
    /// `public.vcard`
    VCard,
}

impl TypeToken {
    /// Returns the platform type identifier for this token.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::FileUrl => "public.file-url",
            Self::Url => "public.url",
            Self::Jpeg => "public.jpeg",
            Self::Jpeg2000 => "public.jpeg-2000",
            Self::Tiff => "public.tiff",
            Self::Pict => "com.apple.pict",
            Self::Gif => "com.compuserve.gif",
            Self::Png => "public.png",
            Self::QuickTimeImage => "com.apple.quicktime-image",
            Self::AppleIcns => "com.apple.icns",
            Self::Bmp => "com.microsoft.bmp",
            Self::Ico => "com.microsoft.ico",
            Self::Image => "public.image",
            Self::QuickTimeMovie => "com.apple.quicktime-movie",
            Self::Mpeg => "public.mpeg",
            Self::Mpeg4 => "public.mpeg-4",
            Self::Mp3 => "public.mp3",
            Self::Mpeg4Audio => "public.mpeg-4-audio",
            Self::AppleProtectedMpeg4Audio => "com.apple.protected-mpeg-4-audio",
            Self::AudiovisualContent => "public.audiovisual-content",
            Self::Text => "public.text",
            Self::Pdf => "com.adobe.pdf",
            Self::Rtfd => "com.apple.rtfd",
            Self::VCard => "public.vcard",
        }
    }

    /// Returns the family this token belongs to.
    #[must_use]
    pub const fn family(self) -> TypeFamily {
        match self {
            Self::FileUrl => TypeFamily::FileReference,
            Self::Url => TypeFamily::Link,
            Self::Jpeg
            | Self::Jpeg2000
            | Self::Tiff
            | Self::Pict
            | Self::Gif
            | Self::Png
            | Self::QuickTimeImage
            | Self::AppleIcns
            | Self::Bmp
            | Self::Ico
            | Self::Image => TypeFamily::Image,
            Self::QuickTimeMovie
            | Self::Mpeg
            | Self::Mpeg4
            | Self::Mp3
            | Self::Mpeg4Audio
            | Self::AppleProtectedMpeg4Audio
            | Self::AudiovisualContent => TypeFamily::Audiovisual,
            Self::Text => TypeFamily::Text,
            Self::Pdf | Self::Rtfd => TypeFamily::Document,
            Self::VCard => TypeFamily::ContactCard,
        }
    }

    /// Returns `true` for every token in the image family, including the
    /// generic [`TypeToken::Image`].
    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(self.family(), TypeFamily::Image)
    }

    /// Returns the preferred filename extension, if the token has one.
    ///
    /// Umbrella categories have no single extension and return `None`.
    #[must_use]
    pub const fn canonical_extension(self) -> Option<&'static str> {
        match self {
            Self::FileUrl | Self::Url | Self::Image | Self::AudiovisualContent => None,
            Self::Jpeg => Some("jpeg"),
            Self::Jpeg2000 => Some("jp2"),
            Self::Tiff => Some("tiff"),
            Self::Pict => Some("pict"),
            Self::Gif => Some("gif"),
            Self::Png => Some("png"),
            Self::QuickTimeImage => Some("qtif"),
            Self::AppleIcns => Some("icns"),
            Self::Bmp => Some("bmp"),
            Self::Ico => Some("ico"),
            Self::QuickTimeMovie => Some("mov"),
            Self::Mpeg => Some("mpg"),
            Self::Mpeg4 => Some("mp4"),
            Self::Mp3 => Some("mp3"),
            Self::Mpeg4Audio => Some("m4a"),
            Self::AppleProtectedMpeg4Audio => Some("m4p"),
            Self::Text => Some("txt"),
            Self::Pdf => Some("pdf"),
            Self::Rtfd => Some("rtfd"),
            Self::VCard => Some("vcf"),
        }
    }
}

impl TryFrom<&str> for TypeToken {
    type Error = ParseTypeTokenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        super::TypePriorityTable::ORDER
            .iter()
            .copied()
            .find(|token| token.identifier() == normalized)
            .ok_or_else(|| ParseTypeTokenError(value.to_owned()))
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
