use amber_media::{AUDIO_EXTENSIONS, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use regex::Regex;
use std::sync::LazyLock;

/// URL prefix of the ephemeral upload host that attachments are relocated from.
pub const UPLOAD_HOST_PREFIX: &str = "https://github.com/user-attachments/";
/// Caption substituted when a reference carries no usable alt text.
pub const DEFAULT_CAPTION: &str = "media";
/// Delimiter marking both ends of a canonical media block.
pub const MEDIA_BLOCK_MARKER: &str = ":::media";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Markdown image `![alt](url)`. Matches any target URL; callers filter by host.
regex!(MARKDOWN_IMAGE_REGEX, r"!\[([^\]]*)\]\(([^)]+)\)");
// HTML image tag with quoted or unquoted `src`. The regex crate has no
// backreferences, so the three quoting styles are separate capture groups
// (see `attr_capture`).
regex!(HTML_IMAGE_REGEX, r#"<img[^>]*src=(?:"([^"]+)"|'([^']+)'|([^"'\s>]+))[^>]*>"#);
// `alt` attribute inside a matched tag. Empty quoted values deliberately
// don't match; they fall back to the placeholder caption.
regex!(HTML_ALT_REGEX, r#"alt=(?:"([^"]+)"|'([^']+)'|([^"'\s>]+))"#);
// Bare attachment URL (the shape drag-and-dropped videos/audio arrive in).
regex!(PLAIN_ATTACHMENT_REGEX, r"https://github\.com/user-attachments/assets/[a-zA-Z0-9-]+");

// The two recognised video-link shapes; group 1 is the video identifier.
regex!(YOUTUBE_WATCH_REGEX, r"https?://(?:www\.)?youtube\.com/watch\?v=([a-zA-Z0-9_-]+)");
regex!(YOUTUBE_SHORT_REGEX, r"https?://(?:www\.)?youtu\.be/([a-zA-Z0-9_-]+)");

// Bare URLs ending in a known media extension. Host exclusion (the upload
// host belongs to the attachment extractor) is a post-match filter since the
// regex crate has no lookahead.
regex!(DIRECT_IMAGE_REGEX, direct_pattern(IMAGE_EXTENSIONS).as_str());
regex!(DIRECT_VIDEO_REGEX, direct_pattern(VIDEO_EXTENSIONS).as_str());
regex!(DIRECT_AUDIO_REGEX, direct_pattern(AUDIO_EXTENSIONS).as_str());

fn direct_pattern(extensions: &[&str]) -> String {
    format!(r"(?i)https?://[^\s<>\[\]()]+\.(?:{})", extensions.join("|"))
}

// Cleanup pass.
regex!(BLANK_RUN_REGEX, r"\n{3,}");
regex!(IMG_TAG_REGEX, r"<img[^>]*>");

/// The attribute value of a quoted-or-unquoted capture ([`HTML_IMAGE_REGEX`]
/// and [`HTML_ALT_REGEX`] share the three-group layout), whichever quoting
/// style matched.
pub(crate) fn attr_capture<'t>(caps: &regex::Captures<'t>) -> Option<&'t str> {
    caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)).map(|m| m.as_str())
}
