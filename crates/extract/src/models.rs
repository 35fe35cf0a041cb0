//! Match and resolution types shared across the extraction passes.
//!
//! All of these are transient: computed once per transformation call and
//! discarded after rewriting. There is no cross-call cache; the same source
//! URL appearing in two separate submissions is relocated twice.

use amber_media::MediaKind;

/// An attachment reference discovered in the text: a pointer to media on the
/// ephemeral upload host, destined for relocation to permanent storage.
///
/// One `Attachment` per distinct source URL, however many textual shapes
/// (markdown image, HTML tag, bare URL) it appears in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub url: String,
    /// Alt/caption text from the first shape that captured this URL.
    pub caption: String,
}

/// A recognised video-sharing link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoLink {
    /// The URL exactly as it appeared in the text.
    pub url: String,
    /// Canonical video identifier derived from the URL.
    pub video_id: String,
    /// Pre-built thumbnail embed snippet that replaces the URL.
    pub embed: String,
}

/// A bare URL pointing directly at hotlinked media on some third-party host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectMedia {
    pub url: String,
    pub kind: MediaKind,
}

/// Relocation result for one attachment source URL.
///
/// Produced by the relocation phase, consumed by the rewriter. At most one
/// entry per source URL regardless of how many times the URL occurs in the
/// text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub source_url: String,
    pub permanent_url: String,
    pub caption: String,
    pub kind: MediaKind,
}
