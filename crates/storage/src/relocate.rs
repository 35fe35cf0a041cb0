//! Relocation of fetched media into permanent storage.
//!
//! A [`Relocator`] takes raw bytes plus whatever naming hints arrived with
//! them, derives a collision-resistant storage key, writes the object
//! through a [`StorageBackend`](crate::StorageBackend), and reports the
//! permanent public URL the rewritten text should point at.

use crate::BackendHandle;
use crate::error::{ErrorKind, Result};
use crate::path::validate as validate_path;
use amber_media::{MediaKind, resolve_extension, sanitize};
use exn::OptionExt;
use std::path::PathBuf;
use time::UtcDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::{info, instrument};

/// Key prefix everything is stored under.
const KEY_PREFIX: &str = "files";

/// `YYYYMMDD_HHMMSS`, always UTC. Second resolution is enough: two uploads
/// of the same filename within one second land on the same key, which is an
/// overwrite of identical intent rather than a collision worth fighting.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// How permanent URLs are assembled from storage keys.
#[derive(Debug, Clone)]
pub enum AddressStyle {
    /// A CDN or vanity domain mapped to the bucket root.
    CustomDomain(String),
    /// Virtual-hosted bucket addressing on the provider's endpoint host.
    BucketHost { bucket: String, host: String },
}

impl AddressStyle {
    /// Public URL for a storage key.
    pub fn permanent_url(&self, key: &str) -> String {
        match self {
            Self::CustomDomain(domain) => format!("{}/{key}", domain.trim_end_matches('/')),
            Self::BucketHost { bucket, host } => format!("https://{bucket}.{host}/{key}"),
        }
    }
}

/// A successfully relocated object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Storage key relative to the backend root.
    pub key: PathBuf,
    /// Public URL the object is reachable at.
    pub url: String,
    /// Classification derived from the final stored name.
    pub kind: MediaKind,
}

/// Writes media into a backend under canonical keys.
pub struct Relocator {
    backend: BackendHandle,
    address: AddressStyle,
}

impl Relocator {
    pub fn new(backend: BackendHandle, address: AddressStyle) -> Self {
        Self { backend, address }
    }

    /// Store one object and return where it now lives.
    ///
    /// The storage key is `files/<kind-folder>/<timestamp>_<name>`, where
    /// `name` is the sanitized `name_hint` with a detected extension
    /// appended when the hint carries none. The extension decides the kind
    /// folder, so detection runs before classification.
    #[instrument(skip(self, data), fields(backend = self.backend.name(), bytes = data.len()))]
    pub async fn store(&self, name_hint: &str, content_type: Option<&str>, data: &[u8]) -> Result<StoredAsset> {
        let mut name = sanitize(name_hint);
        if !name.contains('.') {
            name.push_str(resolve_extension(content_type, data));
        }
        let kind = MediaKind::from_name(&name);

        let timestamp = UtcDateTime::now()
            .format(TIMESTAMP_FORMAT)
            .map_err(|err| ErrorKind::BackendError(format!("formatting storage timestamp: {err}")))?;
        let key = validate_path(format!("{KEY_PREFIX}/{}/{timestamp}_{name}", kind.folder()))?;

        self.backend.write(&key, data).await?;

        let key_str = key.to_str().ok_or_raise(|| ErrorKind::InvalidPath(key.clone()))?;
        let url = self.address.permanent_url(key_str);
        info!(key = %key.display(), %url, "stored media object");
        Ok(StoredAsset { key, url, kind })
    }
}

impl std::fmt::Debug for Relocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relocator")
            .field("backend", &self.backend.name())
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LocalBackend;
    use std::sync::Arc;

    fn relocator(root: &std::path::Path) -> Relocator {
        let backend = Arc::new(LocalBackend::new("test", root).unwrap());
        Relocator::new(backend, AddressStyle::CustomDomain("https://cdn.example".into()))
    }

    #[tokio::test]
    async fn stores_under_kind_folder_with_timestamped_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let stored = relocator(temp_dir.path()).store("My Photo.PNG", None, b"data").await.unwrap();

        assert_eq!(stored.kind, MediaKind::Image);
        let key = stored.key.to_str().unwrap();
        assert!(key.starts_with("files/images/"), "got key {key}");
        assert!(key.ends_with("_my-photo.png"), "got key {key}");
        // files/images/YYYYMMDD_HHMMSS_my-photo.png
        let file_name = stored.key.file_name().unwrap().to_str().unwrap();
        assert_eq!(file_name.len(), "20240101_120000_my-photo.png".len());
        assert!(temp_dir.path().join(&stored.key).exists());
    }

    #[tokio::test]
    async fn appends_detected_extension_when_hint_has_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let png = b"\x89PNG\r\n\x1a\n....";
        let stored = relocator(temp_dir.path()).store("abc-123", None, png).await.unwrap();
        assert!(stored.key.to_str().unwrap().ends_with("_abc-123.png"));
        assert_eq!(stored.kind, MediaKind::Image);
    }

    #[tokio::test]
    async fn content_type_beats_signature() {
        let temp_dir = tempfile::tempdir().unwrap();
        let png = b"\x89PNG\r\n\x1a\n....";
        let stored = relocator(temp_dir.path()).store("clip", Some("video/mp4"), png).await.unwrap();
        assert!(stored.key.to_str().unwrap().ends_with("_clip.mp4"));
        assert_eq!(stored.kind, MediaKind::Video);
        assert!(stored.key.starts_with("files/videos"));
    }

    #[tokio::test]
    async fn unidentifiable_bytes_fall_back_to_image() {
        let temp_dir = tempfile::tempdir().unwrap();
        let stored = relocator(temp_dir.path()).store("mystery", None, b"??").await.unwrap();
        assert!(stored.key.to_str().unwrap().ends_with("_mystery.jpg"));
        assert_eq!(stored.kind, MediaKind::Image);
    }

    #[tokio::test]
    async fn custom_domain_url() {
        let temp_dir = tempfile::tempdir().unwrap();
        let stored = relocator(temp_dir.path()).store("pic.jpg", None, b"x").await.unwrap();
        assert_eq!(stored.url, format!("https://cdn.example/{}", stored.key.display()));
    }

    #[tokio::test]
    async fn bucket_host_url() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(LocalBackend::new("test", temp_dir.path()).unwrap());
        let relocator = Relocator::new(
            backend,
            AddressStyle::BucketHost { bucket: "media".into(), host: "s3.us-west-004.backblazeb2.com".into() },
        );
        let stored = relocator.store("pic.jpg", None, b"x").await.unwrap();
        assert_eq!(
            stored.url,
            format!("https://media.s3.us-west-004.backblazeb2.com/{}", stored.key.display())
        );
    }

    #[test]
    fn address_style_trims_trailing_slash() {
        let style = AddressStyle::CustomDomain("https://cdn.example/".into());
        assert_eq!(style.permanent_url("files/images/a.jpg"), "https://cdn.example/files/images/a.jpg");
    }
}
