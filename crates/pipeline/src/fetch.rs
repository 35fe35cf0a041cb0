//! Downloading source media.

use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use std::time::Duration;

/// How long to wait on any single download before giving up. Attachments on
/// the upload host are served from a CDN; anything slower than this is down.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A downloaded object and the Content-Type the server claimed for it.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Source a URL's bytes. Abstracted so the pipeline can be tested without
/// network access.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Fetched>;
}

/// [`Fetcher`] backed by an HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| ErrorKind::Fetch(format!("building HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Fetched> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| ErrorKind::Fetch(format!("{url}: {err}")))?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(|err| ErrorKind::Fetch(format!("{url}: {err}")))?;
        Ok(Fetched { bytes: bytes.to_vec(), content_type })
    }
}
