//! Extraction of direct (hotlinked) media URLs.

use crate::consts::{self, MEDIA_BLOCK_MARKER, UPLOAD_HOST_PREFIX};
use crate::models::DirectMedia;
use amber_media::MediaKind;
use tracing::instrument;

/// Find bare URLs pointing directly at media files on third-party hosts.
///
/// A URL qualifies when it ends in a known image/video/audio extension
/// (case-insensitive) and is none of the following:
///
/// - an upload-host URL (those belong to the attachment extractor),
/// - the target of a markdown image anywhere in the text,
/// - already inside an existing canonical media block.
///
/// Scan order is images, then video, then audio; deduplicated by URL.
///
/// # Examples
///
/// ```
/// use amber_extract::extract_direct_media;
/// use amber_media::MediaKind;
///
/// let found = extract_direct_media("see https://example.com/pic.PNG here");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, MediaKind::Image);
/// ```
#[instrument(skip(content), fields(len = content.len()))]
pub fn extract_direct_media(content: &str) -> Vec<DirectMedia> {
    let patterns = [
        (&consts::DIRECT_IMAGE_REGEX, MediaKind::Image),
        (&consts::DIRECT_VIDEO_REGEX, MediaKind::Video),
        (&consts::DIRECT_AUDIO_REGEX, MediaKind::Audio),
    ];

    let mut found: Vec<DirectMedia> = Vec::new();
    for (regex, kind) in patterns {
        for m in regex.find_iter(content) {
            let url = m.as_str();
            if is_upload_host(url) {
                continue;
            }
            if found.iter().any(|existing| existing.url == url) {
                continue;
            }
            if is_markdown_image_target(content, url) {
                continue;
            }
            if inside_media_block(content, url) {
                continue;
            }
            found.push(DirectMedia { url: url.to_string(), kind });
        }
    }
    found
}

/// Whether the URL points at the upload host, regardless of scheme. The
/// attachment extractor only ever relocates `https://` URLs, but a plain
/// `http://` reference to the ephemeral host must still not be wrapped as
/// if it were permanent third-party media.
fn is_upload_host(url: &str) -> bool {
    let authority = UPLOAD_HOST_PREFIX.trim_start_matches("https://");
    url.split_once("://").map_or(url, |(_, rest)| rest).starts_with(authority)
}

/// Whether the URL already appears inside the target of a markdown image
/// somewhere in the text.
fn is_markdown_image_target(content: &str, url: &str) -> bool {
    consts::MARKDOWN_IMAGE_REGEX.captures_iter(content).any(|caps| caps[2].contains(url))
}

/// Whether the URL already appears inside a pre-existing canonical media
/// block, located by scanning paired block-delimiter markers.
fn inside_media_block(content: &str, url: &str) -> bool {
    let mut search_from = 0;
    while let Some(open) = content[search_from..].find(MEDIA_BLOCK_MARKER) {
        let start = search_from + open;
        let body = start + MEDIA_BLOCK_MARKER.len();
        // An opening marker without a closing partner delimits nothing.
        let Some(close) = content[body..].find(MEDIA_BLOCK_MARKER) else {
            return false;
        };
        let end = body + close + MEDIA_BLOCK_MARKER.len();
        if content[start..end].contains(url) {
            return true;
        }
        search_from = end;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/photo.jpg", MediaKind::Image)]
    #[case("https://example.com/photo.JPEG", MediaKind::Image)]
    #[case("http://cdn.example.net/clip.mp4", MediaKind::Video)]
    #[case("https://example.org/song.flac", MediaKind::Audio)]
    fn recognises_media_extensions(#[case] url: &str, #[case] kind: MediaKind) {
        let text = format!("link: {url} end");
        let found = extract_direct_media(&text);
        assert_eq!(found, vec![DirectMedia { url: url.into(), kind }]);
    }

    #[rstest]
    #[case("https://github.com/user-attachments/media/pic.png")]
    #[case("http://github.com/user-attachments/media/pic.png")]
    fn skips_upload_host_whatever_the_scheme(#[case] url: &str) {
        // Upload-host URLs are the attachment extractor's business even when
        // they happen to end in a media extension.
        assert!(extract_direct_media(url).is_empty());
    }

    #[test]
    fn skips_markdown_image_targets() {
        let text = "![already embedded](https://example.com/pic.png)";
        assert!(extract_direct_media(text).is_empty());
    }

    #[test]
    fn skips_urls_inside_media_blocks() {
        let text = concat!(
            ":::media\n",
            "- url: \"https://example.com/old.jpg\"\n",
            "  mediaType: \"image\"\n",
            "  aspectRatio: \"landscape\"\n",
            "  caption: \"old\"\n",
            ":::media\n",
            "but https://example.com/new.jpg is fresh",
        );
        let found = extract_direct_media(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].url, "https://example.com/new.jpg");
    }

    #[test]
    fn unpaired_marker_delimits_nothing() {
        let text = ":::media\nhttps://example.com/pic.png";
        let found = extract_direct_media(text);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn dedupes_repeated_url() {
        let text = "https://example.com/pic.png and https://example.com/pic.png";
        assert_eq!(extract_direct_media(text).len(), 1);
    }

    #[test]
    fn images_scanned_before_video_and_audio() {
        let text = "https://a.example/x.mp3 https://b.example/y.png";
        let found = extract_direct_media(text);
        assert_eq!(found[0].kind, MediaKind::Image);
        assert_eq!(found[1].kind, MediaKind::Audio);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "https://example.com/a.png https://example.com/b.mp4";
        assert_eq!(extract_direct_media(text), extract_direct_media(text));
    }
}
