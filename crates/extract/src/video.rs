//! Extraction of video-sharing links.

use crate::consts;
use crate::models::VideoLink;
use tracing::instrument;

/// Build the thumbnail embed snippet that replaces a video link.
pub(crate) fn embed_snippet(video_id: &str, url: &str) -> String {
    format!(r#"[![Video](http://img.youtube.com/vi/{video_id}/0.jpg)]({url} "Video")"#)
}

/// Find every video link in the text.
///
/// Recognises the `youtube.com/watch?v=` and `youtu.be/` shapes, derives the
/// video identifier, and pre-builds the embed snippet the rewriter will
/// substitute. Deduplicated by full matched URL across both shapes.
///
/// # Examples
///
/// ```
/// use amber_extract::extract_video_links;
///
/// let found = extract_video_links("Photo: https://youtube.com/watch?v=abc123");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].video_id, "abc123");
/// assert_eq!(
///     found[0].embed,
///     "[![Video](http://img.youtube.com/vi/abc123/0.jpg)](https://youtube.com/watch?v=abc123 \"Video\")",
/// );
/// ```
#[instrument(skip(content), fields(len = content.len()))]
pub fn extract_video_links(content: &str) -> Vec<VideoLink> {
    let mut found: Vec<VideoLink> = Vec::new();
    for regex in [&consts::YOUTUBE_WATCH_REGEX, &consts::YOUTUBE_SHORT_REGEX] {
        for caps in regex.captures_iter(content) {
            // Capture group 0 always exists on a match.
            let url = caps.get(0).unwrap().as_str();
            if found.iter().any(|existing| existing.url == url) {
                continue;
            }
            let video_id = caps[1].to_string();
            found.push(VideoLink {
                url: url.to_string(),
                embed: embed_snippet(&video_id, url),
                video_id,
            });
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url() {
        let found = extract_video_links("see https://www.youtube.com/watch?v=dQw4w9WgXcQ now");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].video_id, "dQw4w9WgXcQ");
        assert_eq!(found[0].url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn short_url() {
        let found = extract_video_links("https://youtu.be/abc_123-X");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].video_id, "abc_123-X");
    }

    #[test]
    fn embed_snippet_shape() {
        let found = extract_video_links("https://youtube.com/watch?v=abc123");
        assert_eq!(
            found[0].embed,
            r#"[![Video](http://img.youtube.com/vi/abc123/0.jpg)](https://youtube.com/watch?v=abc123 "Video")"#
        );
    }

    #[test]
    fn dedupes_repeated_url() {
        let text = "https://youtu.be/same https://youtu.be/same";
        assert_eq!(extract_video_links(text).len(), 1);
    }

    #[test]
    fn distinct_videos_both_kept() {
        let text = "https://youtube.com/watch?v=one and https://youtu.be/two";
        let found = extract_video_links(text);
        assert_eq!(found.iter().map(|v| v.video_id.as_str()).collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert!(extract_video_links("no videos here").is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "https://youtube.com/watch?v=idem https://youtu.be/potent";
        assert_eq!(extract_video_links(text), extract_video_links(text));
    }
}
