//! Extension detection from byte signatures and Content-Type headers.

use crate::FALLBACK_EXTENSION;

/// Detect a file extension from a magic-byte prefix.
///
/// Inspects a short, fixed prefix of the content against a table of
/// container/box signatures for the common image, video, and audio formats.
/// Inputs shorter than a signature simply don't match it; the first match in
/// table order wins. Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use amber_media::extension_from_signature;
/// assert_eq!(extension_from_signature(b"\x89PNG\r\n\x1a\nrest"), Some(".png"));
/// assert_eq!(extension_from_signature(b"plain text"), None);
/// assert_eq!(extension_from_signature(b""), None);
/// ```
#[must_use]
pub fn extension_from_signature(content: &[u8]) -> Option<&'static str> {
    // ISO base media file format: the ftyp box sits at offset 4.
    if content.len() >= 12 && &content[4..8] == b"ftyp" {
        return Some(match &content[8..12] {
            b"M4V " => ".m4v",
            b"M4A " => ".m4a",
            _ => ".mp4",
        });
    }
    // Matroska/WebM share the EBML header; stored as .mkv.
    if content.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
        return Some(".mkv");
    }
    if content.len() >= 12 && content.starts_with(b"RIFF") {
        match &content[8..12] {
            b"AVI " => return Some(".avi"),
            b"WEBP" => return Some(".webp"),
            b"WAVE" => return Some(".wav"),
            _ => {},
        }
    }
    // Bare QuickTime atoms at offset 0 (no ftyp box).
    if content.len() >= 4 && matches!(&content[..4], b"moov" | b"mdat" | b"wide" | b"free") {
        return Some(".mov");
    }
    if content.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(".jpg");
    }
    if content.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some(".png");
    }
    if content.starts_with(b"GIF87a") || content.starts_with(b"GIF89a") {
        return Some(".gif");
    }
    if content.starts_with(b"BM") {
        return Some(".bmp");
    }
    // MP3: either an ID3 tag or a bare frame sync.
    if content.starts_with(b"ID3") {
        return Some(".mp3");
    }
    if content.len() >= 2 && matches!([content[0], content[1]], [0xFF, 0xFB] | [0xFF, 0xF3] | [0xFF, 0xF2]) {
        return Some(".mp3");
    }
    if content.starts_with(b"OggS") {
        return Some(".ogg");
    }
    if content.starts_with(b"fLaC") {
        return Some(".flac");
    }
    None
}

/// Detect a file extension from an HTTP `Content-Type` header value.
///
/// Parameters (anything after `;`) are stripped and the type is lowercased
/// before lookup. Returns `None` for unrecognised or empty input.
///
/// # Examples
///
/// ```
/// use amber_media::extension_from_content_type;
/// assert_eq!(extension_from_content_type("image/png"), Some(".png"));
/// assert_eq!(extension_from_content_type("Video/MP4; codecs=avc1"), Some(".mp4"));
/// assert_eq!(extension_from_content_type("text/html"), None);
/// ```
#[must_use]
pub fn extension_from_content_type(content_type: &str) -> Option<&'static str> {
    let normalized = content_type.split(';').next().unwrap_or("").trim().to_lowercase();
    Some(match normalized.as_str() {
        // Video
        "video/mp4" | "video/mpeg" => ".mp4",
        "video/quicktime" => ".mov",
        "video/x-msvideo" => ".avi",
        "video/x-matroska" => ".mkv",
        "video/webm" => ".webm",
        "video/x-flv" => ".flv",
        "video/x-ms-wmv" => ".wmv",
        // Image
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "image/bmp" => ".bmp",
        "image/svg+xml" => ".svg",
        "image/x-icon" => ".ico",
        // Audio
        "audio/mpeg" | "audio/mp3" => ".mp3",
        "audio/wav" | "audio/wave" | "audio/x-wav" => ".wav",
        "audio/ogg" => ".ogg",
        "audio/flac" => ".flac",
        "audio/aac" => ".aac",
        "audio/x-m4a" => ".m4a",
        _ => return None,
    })
}

/// Determine an attachment's true extension.
///
/// Preference order: Content-Type header, then byte signature, then
/// [`FALLBACK_EXTENSION`]. The header is server-controlled but more often
/// correct than sniffing a short prefix; sniffing is the right fallback for
/// hosts that omit the header entirely.
#[must_use]
pub fn resolve_extension(content_type: Option<&str>, content: &[u8]) -> &'static str {
    content_type
        .and_then(extension_from_content_type)
        .or_else(|| extension_from_signature(content))
        .unwrap_or(FALLBACK_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // 'ftyp' box with assorted subtypes
    #[case(b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00".as_slice(), Some(".mp4"))]
    #[case(b"\x00\x00\x00\x20ftypmp42\x00\x00\x00\x00".as_slice(), Some(".mp4"))]
    #[case(b"\x00\x00\x00\x20ftypM4V \x00\x00\x00\x00".as_slice(), Some(".m4v"))]
    #[case(b"\x00\x00\x00\x20ftypM4A \x00\x00\x00\x00".as_slice(), Some(".m4a"))]
    #[case(&[0x1A, 0x45, 0xDF, 0xA3, 0x01], Some(".mkv"))]
    #[case(b"RIFF\x24\x00\x00\x00AVI LIST".as_slice(), Some(".avi"))]
    #[case(b"RIFF\x24\x00\x00\x00WEBPVP8 ".as_slice(), Some(".webp"))]
    #[case(b"RIFF\x24\x00\x00\x00WAVEfmt ".as_slice(), Some(".wav"))]
    #[case(b"moov\x00\x00\x00\x00".as_slice(), Some(".mov"))]
    #[case(&[0xFF, 0xD8, 0xFF, 0xE0], Some(".jpg"))]
    #[case(b"\x89PNG\r\n\x1a\n\x00\x00".as_slice(), Some(".png"))]
    #[case(b"GIF89a,,,,".as_slice(), Some(".gif"))]
    #[case(b"BM\x36\x00".as_slice(), Some(".bmp"))]
    #[case(b"ID3\x04\x00".as_slice(), Some(".mp3"))]
    #[case(&[0xFF, 0xFB, 0x90, 0x00], Some(".mp3"))]
    #[case(b"OggS\x00\x02".as_slice(), Some(".ogg"))]
    #[case(b"fLaC\x00\x00\x00\x22".as_slice(), Some(".flac"))]
    #[case(b"<!DOCTYPE html>".as_slice(), None)]
    #[case(b"".as_slice(), None)]
    fn test_extension_from_signature(#[case] content: &[u8], #[case] expected: Option<&str>) {
        assert_eq!(extension_from_signature(content), expected);
    }

    #[test]
    fn test_signature_tolerates_short_input() {
        // Shorter than every signature that needs offset indexing.
        for len in 0..12 {
            let truncated = &b"\x00\x00\x00\x20ftypisom"[..len.min(12)];
            // Must never panic; matching is best-effort.
            let _ = extension_from_signature(truncated);
        }
        assert_eq!(extension_from_signature(b"RIFF"), None);
        assert_eq!(extension_from_signature(&[0xFF]), None);
    }

    #[rstest]
    #[case("video/mp4", Some(".mp4"))]
    #[case("video/quicktime", Some(".mov"))]
    #[case("image/jpeg", Some(".jpg"))]
    #[case("IMAGE/PNG", Some(".png"))]
    #[case("image/svg+xml", Some(".svg"))]
    #[case("audio/mpeg", Some(".mp3"))]
    #[case("audio/x-m4a", Some(".m4a"))]
    #[case("video/webm; codecs=\"vp9\"", Some(".webm"))]
    #[case("text/plain; charset=utf-8", None)]
    #[case("application/octet-stream", None)]
    #[case("", None)]
    fn test_extension_from_content_type(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(extension_from_content_type(header), expected);
    }

    #[test]
    fn test_resolve_prefers_content_type() {
        // Header says PNG, bytes say JPEG: header wins.
        assert_eq!(resolve_extension(Some("image/png"), &[0xFF, 0xD8, 0xFF, 0xE0]), ".png");
    }

    #[test]
    fn test_resolve_falls_back_to_signature() {
        let mp4 = b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00";
        assert_eq!(resolve_extension(None, mp4), ".mp4");
        assert_eq!(resolve_extension(Some("application/octet-stream"), mp4), ".mp4");
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve_extension(None, b"mystery bytes"), ".jpg");
    }
}
