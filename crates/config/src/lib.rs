//! Configuration loading for the media relocation service.
//!
//! Settings arrive exclusively through environment variables with the
//! `AMBER_STORAGE_` prefix, since the expected runtime is a CI job where
//! secrets are injected as env vars rather than config files.

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use tracing::instrument;

/// Environment variable prefix all settings are read from.
pub const ENV_PREFIX: &str = "AMBER_STORAGE_";

/// Connection settings for the object storage target.
///
/// | Field               | Environment variable               |
/// |---------------------|------------------------------------|
/// | `access_key_id`     | `AMBER_STORAGE_ACCESS_KEY_ID`      |
/// | `secret_access_key` | `AMBER_STORAGE_SECRET_ACCESS_KEY`  |
/// | `endpoint_url`      | `AMBER_STORAGE_ENDPOINT_URL`       |
/// | `bucket_name`       | `AMBER_STORAGE_BUCKET_NAME`        |
/// | `custom_domain`     | `AMBER_STORAGE_CUSTOM_DOMAIN`      |
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Full endpoint URL, e.g. `https://us-east-1.linodeobjects.com`.
    pub endpoint_url: String,
    pub bucket_name: String,
    /// Optional CDN/vanity domain mapped to the bucket root. When unset,
    /// permanent URLs use virtual-hosted bucket addressing on the endpoint.
    pub custom_domain: Option<String>,
}

impl StorageSettings {
    /// Load settings from the environment.
    #[instrument]
    pub fn load() -> Result<Self> {
        Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .or_raise(|| ErrorKind::Invalid(format!("incomplete {ENV_PREFIX}* environment")))
    }

    /// Hostname of the storage endpoint, with scheme and any path stripped.
    pub fn endpoint_host(&self) -> &str {
        let rest = self.endpoint_url.split_once("://").map_or(self.endpoint_url.as_str(), |(_, rest)| rest);
        rest.split(['/', ':']).next().unwrap_or(rest)
    }

    /// Region inferred from the endpoint hostname. Providers like Linode
    /// Object Storage encode the region as the first hostname label
    /// (`us-east-1.linodeobjects.com`).
    pub fn region(&self) -> &str {
        match self.endpoint_host().split('.').next() {
            Some(label) if !label.is_empty() => label,
            _ => "us-east-1",
        }
    }
}
