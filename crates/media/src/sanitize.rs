//! Storage-safe filename normalization.

/// Placeholder used when sanitization leaves nothing usable behind.
const EMPTY_PLACEHOLDER: &str = "file";

/// Normalize an arbitrary filename into a storage-safe token.
///
/// Strips any path component, lowercases, replaces spaces with hyphens,
/// drops every character outside `[a-z0-9\-_.]`, and collapses hyphen runs.
/// If nothing survives (or only a lone `.`), the fixed placeholder `file`
/// is returned instead. Total function; never fails.
///
/// # Examples
///
/// ```
/// use amber_media::sanitize;
/// assert_eq!(sanitize("My Holiday Photo.JPG"), "my-holiday-photo.jpg");
/// assert_eq!(sanitize("/tmp/uploads/report (final).pdf"), "report-final.pdf");
/// assert_eq!(sanitize("¯\\_(ツ)_/¯"), "file");
/// ```
#[must_use]
pub fn sanitize(filename: &str) -> String {
    // Path separators from either platform; everything before the last one
    // is discarded.
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let mut out = String::with_capacity(basename.len());
    for ch in basename.to_lowercase().chars() {
        let ch = if ch == ' ' { '-' } else { ch };
        match ch {
            'a'..='z' | '0'..='9' | '_' | '.' => out.push(ch),
            '-' if !out.ends_with('-') => out.push(ch),
            _ => {},
        }
    }

    if out.is_empty() || out == "." { EMPTY_PLACEHOLDER.to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("photo.jpg", "photo.jpg")]
    #[case("PHOTO.JPG", "photo.jpg")]
    #[case("my holiday photo.png", "my-holiday-photo.png")]
    #[case("a  b.gif", "a-b.gif")]
    #[case("weird--name---here.mp4", "weird-name-here.mp4")]
    #[case("path/to/file.webm", "file.webm")]
    #[case("C:\\Users\\me\\clip.mov", "clip.mov")]
    #[case("under_score-and.dots.ok", "under_score-and.dots.ok")]
    #[case("émoji🎉.png", "moji.png")]
    #[case("", "file")]
    #[case(".", "file")]
    #[case("???", "file")]
    #[case("///", "file")]
    fn test_sanitize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for name in ["My File (1).JPG", "a b c.png", "---.gif", ""] {
            let once = sanitize(name);
            assert_eq!(sanitize(&once), once);
        }
    }
}
