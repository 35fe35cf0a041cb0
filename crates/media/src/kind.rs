use derive_more::Display;
use std::path::Path;

/// File extensions (without the dot) classified as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "ico"];
/// File extensions (without the dot) classified as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv", "flv", "wmv", "m4v"];
/// File extensions (without the dot) classified as audio.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a", "flac", "aac", "wma"];

/// Broad media family of an asset.
///
/// Determines both the storage folder an uploaded asset lands in and the
/// `mediaType` field written into canonical media blocks. Anything that is
/// not recognisably image/video/audio is [`File`](Self::File).
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum MediaKind {
    #[display("image")]
    Image,
    #[display("video")]
    Video,
    #[display("audio")]
    Audio,
    #[default]
    #[display("file")]
    File,
}

impl MediaKind {
    /// Classify by file extension.
    ///
    /// Case-insensitive; a leading dot is tolerated. Unknown extensions
    /// classify as [`MediaKind::File`].
    ///
    /// # Examples
    ///
    /// ```
    /// use amber_media::MediaKind;
    /// assert_eq!(MediaKind::from_extension("PNG"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_extension(".mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_extension("pdf"), MediaKind::File);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Video
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Audio
        } else {
            Self::File
        }
    }

    /// Classify by file name.
    ///
    /// A dotfile like `.jpg` has no extension (it is a hidden file named
    /// "jpg") and therefore classifies as [`MediaKind::File`].
    ///
    /// # Examples
    ///
    /// ```
    /// use amber_media::MediaKind;
    /// assert_eq!(MediaKind::from_name("holiday photo.JPEG"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_name("notes.txt"), MediaKind::File);
    /// assert_eq!(MediaKind::from_name("noextension"), MediaKind::File);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// Storage folder for this kind: `files/<folder>/…`.
    #[must_use]
    pub fn folder(&self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Video => "videos",
            Self::Audio => "audio",
            Self::File => "files",
        }
    }
}
