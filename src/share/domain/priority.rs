//! Ordered negotiation table for content providers.

use super::TypeToken;

/// Fixed preference order used to pick one representation per provider.
///
/// Concrete formats come before the umbrella category that contains them so
/// that format-specific handling wins over generic handling. The order is
/// part of the observable contract.
///
/// # Examples
///
/// ```
/// use courier::share::domain::{TypePriorityTable, TypeToken};
///
/// let offered = [TypeToken::Image, TypeToken::Png];
/// let chosen = TypePriorityTable::first_match(|token| offered.contains(&token));
/// assert_eq!(chosen, Some(TypeToken::Png));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypePriorityTable;

impl TypePriorityTable {
    /// Every recognised token, most preferred first.
    pub const ORDER: [TypeToken; 24] = [
        TypeToken::FileUrl,
        TypeToken::Url,
        TypeToken::Jpeg,
        TypeToken::Jpeg2000,
        TypeToken::Tiff,
        TypeToken::Pict,
        TypeToken::Gif,
        TypeToken::Png,
        TypeToken::QuickTimeImage,
        TypeToken::AppleIcns,
        TypeToken::Bmp,
        TypeToken::Ico,
        TypeToken::Image,
        TypeToken::QuickTimeMovie,
        TypeToken::Mpeg,
        TypeToken::Mpeg4,
        TypeToken::Mp3,
        TypeToken::Mpeg4Audio,
        TypeToken::AppleProtectedMpeg4Audio,
        TypeToken::AudiovisualContent,
        TypeToken::Text,
        TypeToken::Pdf,
        TypeToken::Rtfd,
        TypeToken::VCard,
    ];

    /// Returns the first token, in priority order, accepted by `conforms`.
    ///
    /// The predicate is not called again once a token has matched.
    pub fn first_match(mut conforms: impl FnMut(TypeToken) -> bool) -> Option<TypeToken> {
        Self::ORDER.iter().copied().find(|token| conforms(*token))
    }

    /// Returns the zero-based position of `token` in the table.
    #[must_use]
    pub fn rank(token: TypeToken) -> usize {
        Self::ORDER
            .iter()
            .position(|candidate| *candidate == token)
            .unwrap_or(Self::ORDER.len())
    }
}
