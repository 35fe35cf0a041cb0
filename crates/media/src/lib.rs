//! Media classification and filename utilities.
//!
//! This crate answers two questions the rest of the workspace keeps asking:
//!
//! - *What is this thing?* — [`MediaKind`] classification from a file name
//!   ([`MediaKind::from_name`]), from a magic-byte prefix
//!   ([`extension_from_signature`]), or from an HTTP `Content-Type` header
//!   ([`extension_from_content_type`]), with [`resolve_extension`] combining
//!   the three in the preferred order.
//! - *What do we call it in storage?* — [`sanitize`] turns arbitrary
//!   user-supplied filenames into storage-safe tokens.
//!
//! Everything here is a pure, total function. Unknown inputs classify as
//! [`MediaKind::File`] or return `None`; nothing errors.

mod detect;
mod kind;
mod sanitize;

pub use crate::detect::{extension_from_content_type, extension_from_signature, resolve_extension};
pub use crate::kind::{AUDIO_EXTENSIONS, IMAGE_EXTENSIONS, MediaKind, VIDEO_EXTENSIONS};
pub use crate::sanitize::sanitize;

/// Extension used when neither the Content-Type header nor the byte
/// signature identify the attachment. Favours best-effort placement over
/// blocking the submission.
pub const FALLBACK_EXTENSION: &str = ".jpg";
