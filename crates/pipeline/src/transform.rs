//! The end-to-end transformation: extract, relocate, rewrite.

use crate::error::{ErrorKind, Result};
use crate::fetch::Fetcher;
use amber_extract::{
    ResolvedAsset, cleanup, extract_attachments, extract_direct_media, extract_video_links,
    has_leftover_image_tags, rewrite,
};
use amber_storage::Relocator;
use tracing::{info, instrument};

/// Transform submitted text: relocate every attachment to permanent storage
/// and rewrite all media references in place.
///
/// Attachments are fetched and stored one at a time, failing fast: the first
/// error aborts the transformation and the caller keeps the original text.
/// Video links and direct media need no relocation, only rewriting.
///
/// Text without any media reference passes through unchanged, except that
/// leftover `<img>` tags from earlier failed runs are still cleaned up.
#[instrument(skip_all, fields(len = content.len()))]
pub async fn transform(content: &str, fetcher: &dyn Fetcher, relocator: &Relocator) -> Result<String> {
    let attachments = extract_attachments(content);
    let videos = extract_video_links(content);
    let direct = extract_direct_media(content);
    info!(
        attachments = attachments.len(),
        videos = videos.len(),
        direct = direct.len(),
        "extracted media references",
    );

    if attachments.is_empty() && videos.is_empty() && direct.is_empty() {
        if has_leftover_image_tags(content) {
            return Ok(cleanup(content));
        }
        return Ok(content.to_string());
    }

    let mut resolved = Vec::with_capacity(attachments.len());
    for attachment in &attachments {
        let fetched = fetcher.fetch(&attachment.url).await?;
        let stored = relocator
            .store(name_hint(&attachment.url), fetched.content_type.as_deref(), &fetched.bytes)
            .await
            .map_err(|err| err.raise(ErrorKind::Store(attachment.url.clone())))?;
        resolved.push(ResolvedAsset {
            source_url: attachment.url.clone(),
            permanent_url: stored.url,
            caption: attachment.caption.clone(),
            kind: stored.kind,
        });
    }

    Ok(rewrite(content, &resolved, &videos, &direct))
}

/// Filename hint from the last path segment of a URL, query and fragment
/// stripped. Upload-host asset URLs end in an opaque identifier, which is
/// fine: the stored extension comes from content detection.
fn name_hint(url: &str) -> &str {
    let trimmed = url.split(['?', '#']).next().unwrap_or(url);
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if segment.is_empty() { "attachment" } else { segment }
}
