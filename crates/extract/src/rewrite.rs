//! Position-preserving rewriting of discovered media references.
//!
//! The extractors report *what* was found; this module decides *where* every
//! occurrence sits in the original text and splices the canonical
//! replacement into exactly that span. Offsets are re-derived here rather
//! than trusted from extraction, because one URL may occur several times and
//! each occurrence needs its own span.

use crate::cleanup::cleanup;
use crate::consts::{self, attr_capture};
use crate::models::{DirectMedia, ResolvedAsset, VideoLink};
use amber_media::MediaKind;
use tracing::{instrument, warn};

/// One planned replacement: an exact byte span of the original text and the
/// canonical output that takes its place.
#[derive(Debug)]
struct Edit {
    offset: usize,
    len: usize,
    output: String,
}

impl Edit {
    fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// The canonical media block every resolved asset converges to. Must stay
/// bit-exact; downstream rendering parses this shape.
fn media_block(url: &str, kind: MediaKind, caption: &str) -> String {
    format!(
        ":::media\n- url: \"{url}\"\n  mediaType: \"{kind}\"\n  aspectRatio: \"landscape\"\n  caption: \"{caption}\"\n:::media"
    )
}

/// Neighbour-character guard for bare-URL occurrences. A URL hugged by a
/// quote (or bracket) is part of a construct that is matched whole by one of
/// the shaped patterns, so the bare occurrence must not be recorded again.
fn is_bounded(content: &str, offset: usize, len: usize, before: &[char], after: &[char]) -> bool {
    let prev_ok = content[..offset].chars().next_back().is_none_or(|c| !before.contains(&c));
    let next_ok = content[offset + len..].chars().next().is_none_or(|c| !after.contains(&c));
    prev_ok && next_ok
}

/// Record an occurrence unless it conflicts with one already planned:
/// an identical start offset keeps the first recording, and a span lying
/// entirely inside an existing span is discarded in favour of the outer one
/// (a bare URL inside an already-matched HTML tag, for instance).
fn record(edits: &mut Vec<Edit>, offset: usize, len: usize, output: &str) {
    let end = offset + len;
    for existing in edits.iter() {
        if existing.offset == offset {
            return;
        }
        if offset >= existing.offset && end <= existing.end() {
            return;
        }
    }
    edits.push(Edit { offset, len, output: output.to_string() });
}

/// Compute the full replacement plan: every literal occurrence of every
/// resolved reference, conflict-filtered, sorted by start offset descending
/// so the plan can be applied back-to-front.
fn plan(content: &str, resolved: &[ResolvedAsset], videos: &[VideoLink], direct: &[DirectMedia]) -> Vec<Edit> {
    let mut edits: Vec<Edit> = Vec::new();

    for asset in resolved {
        let block = media_block(&asset.permanent_url, asset.kind, &asset.caption);

        // Shape 1: markdown image wrapping this URL.
        for caps in consts::MARKDOWN_IMAGE_REGEX.captures_iter(content) {
            if caps[2].trim() != asset.source_url {
                continue;
            }
            let m = caps.get(0).unwrap();
            record(&mut edits, m.start(), m.len(), &block);
        }

        // Shape 2: HTML tag with this URL as src. The whole tag is replaced.
        for caps in consts::HTML_IMAGE_REGEX.captures_iter(content) {
            if attr_capture(&caps) != Some(asset.source_url.as_str()) {
                continue;
            }
            let m = caps.get(0).unwrap();
            record(&mut edits, m.start(), m.len(), &block);
        }

        // Shape 3: bare occurrences. Quoted ones belong to a tag; occurrences
        // inside a markdown span are culled by the containment rule above.
        for (offset, _) in content.match_indices(asset.source_url.as_str()) {
            if is_bounded(content, offset, asset.source_url.len(), &['"', '\''], &['"', '\'']) {
                record(&mut edits, offset, asset.source_url.len(), &block);
            }
        }
    }

    for video in videos {
        for (offset, _) in content.match_indices(video.url.as_str()) {
            if is_bounded(content, offset, video.url.len(), &['"', '('], &['"', ')']) {
                record(&mut edits, offset, video.url.len(), &video.embed);
            }
        }
    }

    for item in direct {
        // Caption: final path segment, query string stripped.
        let caption = item.url.rsplit('/').next().unwrap_or("").split('?').next().unwrap_or("");
        let block = media_block(&item.url, item.kind, caption);
        for (offset, _) in content.match_indices(item.url.as_str()) {
            if is_bounded(content, offset, item.url.len(), &['"', '('], &['"', ')']) {
                record(&mut edits, offset, item.url.len(), &block);
            }
        }
    }

    edits.sort_by(|a, b| b.offset.cmp(&a.offset));
    edits
}

/// Rewrite the text, replacing every located occurrence of every resolved
/// reference with its canonical output, in place.
///
/// Replacements are applied in descending offset order, so the spans of
/// not-yet-applied edits stay valid while the tail of the string changes
/// underneath them. Finishes with the cleanup pass.
///
/// A resolved asset whose source URL cannot be re-located in the text is
/// skipped with a warning rather than failing the transformation.
///
/// # Examples
///
/// ```
/// use amber_extract::{extract_video_links, rewrite};
///
/// let text = "Photo: https://youtube.com/watch?v=abc123";
/// let videos = extract_video_links(text);
/// let out = rewrite(text, &[], &videos, &[]);
/// assert!(out.starts_with("Photo: [![Video](http://img.youtube.com/vi/abc123/0.jpg)]"));
/// ```
#[instrument(skip_all, fields(len = content.len(), assets = resolved.len(), videos = videos.len(), direct = direct.len()))]
pub fn rewrite(content: &str, resolved: &[ResolvedAsset], videos: &[VideoLink], direct: &[DirectMedia]) -> String {
    let edits = plan(content, resolved, videos, direct);

    for asset in resolved {
        if !edits.iter().any(|edit| edit.output.contains(&asset.permanent_url)) {
            // Extraction and re-location read the same literal text, so a
            // miss means there is nothing to rewrite, not corruption.
            warn!(url = %asset.source_url, "resolved attachment not found in text; leaving it unreplaced");
        }
    }

    let mut out = content.to_string();
    for edit in &edits {
        out.replace_range(edit.offset..edit.end(), &edit.output);
    }
    cleanup(&out)
}
