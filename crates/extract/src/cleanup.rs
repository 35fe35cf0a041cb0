//! Final tidy-up of rewritten text.

use crate::consts;
use tracing::instrument;

/// Collapse runs of three or more newlines down to one blank line and trim
/// surrounding whitespace.
fn collapse(content: &str) -> String {
    consts::BLANK_RUN_REGEX.replace_all(content, "\n\n").trim().to_string()
}

/// Remove leftover `<img>` tags and normalise blank lines.
///
/// Runs after rewriting: any tag still present at that point referenced a
/// URL that could not be relocated, and dead markup reads worse than no
/// markup. Idempotent, so re-processing already-clean text is a no-op.
#[instrument(skip(content), fields(len = content.len()))]
pub fn cleanup(content: &str) -> String {
    let collapsed = collapse(content);
    let stripped = consts::IMG_TAG_REGEX.replace_all(&collapsed, "");
    // Stripping tags can leave fresh blank runs behind.
    collapse(&stripped)
}

/// Whether the text still contains raw `<img>` tags.
pub fn has_leftover_image_tags(content: &str) -> bool {
    consts::IMG_TAG_REGEX.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(cleanup("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn preserves_single_blank_line() {
        assert_eq!(cleanup("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(cleanup("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn strips_leftover_img_tags() {
        let text = "before\n<img src=\"https://example.com/x.png\" alt=\"x\">\nafter";
        assert_eq!(cleanup(text), "before\n\nafter");
    }

    #[test]
    fn stripping_does_not_leave_blank_runs() {
        let text = "a\n\n<img src=x>\n\nb";
        assert_eq!(cleanup(text), "a\n\nb");
    }

    #[test]
    fn cleanup_is_idempotent() {
        let text = "a\n\n\n<img src=x>\n\n\n\nb  ";
        let once = cleanup(text);
        assert_eq!(cleanup(&once), once);
    }

    #[test]
    fn detects_leftover_tags() {
        assert!(has_leftover_image_tags("x <img src=y> z"));
        assert!(!has_leftover_image_tags("no tags"));
    }
}
