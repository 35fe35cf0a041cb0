//! Discovery and in-place rewriting of media references in submitted text.
//!
//! Three extractors locate the reference shapes this engine understands:
//! upload-host attachments ([`extract_attachments`]), video-sharing links
//! ([`extract_video_links`]) and hotlinked media files
//! ([`extract_direct_media`]). [`rewrite`] then splices the canonical
//! replacement for each reference into the exact span it occupied, and
//! [`cleanup`] tidies whatever is left.
//!
//! Extraction never fails: text without media passes through untouched.

mod attachment;
mod cleanup;
mod consts;
mod direct;
mod models;
mod rewrite;
mod video;

pub use attachment::extract_attachments;
pub use cleanup::{cleanup, has_leftover_image_tags};
pub use direct::extract_direct_media;
pub use models::{Attachment, DirectMedia, ResolvedAsset, VideoLink};
pub use rewrite::rewrite;
pub use video::extract_video_links;
