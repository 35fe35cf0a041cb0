//! Extraction of upload-host attachment references.

use crate::consts::{self, DEFAULT_CAPTION, UPLOAD_HOST_PREFIX, attr_capture};
use crate::models::Attachment;
use tracing::instrument;

/// Find every attachment reference in the text.
///
/// Recognises three shapes, checked in this order: markdown image, HTML
/// `<img>` tag (quoted or unquoted attributes), bare asset URL. Results are
/// deduplicated by URL; the first shape to capture a URL supplies its
/// caption. Never fails; unmatched text yields an empty list.
///
/// # Examples
///
/// ```
/// use amber_extract::extract_attachments;
///
/// let text = "Before ![sunset](https://github.com/user-attachments/assets/abc-123) after";
/// let found = extract_attachments(text);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].caption, "sunset");
/// ```
#[instrument(skip(content), fields(len = content.len()))]
pub fn extract_attachments(content: &str) -> Vec<Attachment> {
    let mut found: Vec<Attachment> = Vec::new();

    for caps in consts::MARKDOWN_IMAGE_REGEX.captures_iter(content) {
        let url = caps[2].trim();
        if !url.starts_with(UPLOAD_HOST_PREFIX) {
            continue;
        }
        let alt = caps[1].trim();
        let caption = if alt.is_empty() { DEFAULT_CAPTION } else { alt };
        push_unique(&mut found, url, caption);
    }

    // Drag-and-drop and paste uploads arrive as raw HTML tags.
    for caps in consts::HTML_IMAGE_REGEX.captures_iter(content) {
        let Some(url) = attr_capture(&caps) else { continue };
        if !url.starts_with(UPLOAD_HOST_PREFIX) {
            continue;
        }
        // Capture group 0 always exists on a match.
        let tag = caps.get(0).unwrap().as_str();
        push_unique(&mut found, url, &alt_text(tag));
    }

    // Bare asset URLs: how videos and audio files are usually submitted.
    for m in consts::PLAIN_ATTACHMENT_REGEX.find_iter(content) {
        push_unique(&mut found, m.as_str(), DEFAULT_CAPTION);
    }

    found
}

fn push_unique(found: &mut Vec<Attachment>, url: &str, caption: &str) {
    if !found.iter().any(|existing| existing.url == url) {
        found.push(Attachment {
            url: url.to_string(),
            caption: caption.to_string(),
        });
    }
}

/// Alt text of an `<img>` tag, or the placeholder caption when the attribute
/// is absent or empty.
fn alt_text(tag: &str) -> String {
    consts::HTML_ALT_REGEX
        .captures(tag)
        .and_then(|caps| attr_capture(&caps).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_CAPTION.to_string())
}
