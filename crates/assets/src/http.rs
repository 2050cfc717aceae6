//! HTTP(S) asset resolver.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::raster::Raster;
use crate::resolver::{AssetResolver, resolve_data_uri};
use crate::source::{AssetSource, with_cache_buster};
use crate::AssetError;

/// Resolves remote references over HTTP(S) and embedded data URIs locally.
///
/// The decode/flatten/re-encode backend is a single scratch buffer shared
/// across resolutions within one resolver. It is guarded by a single-slot
/// async lock, so even a misbehaving caller that overlaps resolutions
/// cannot interleave two re-encodes. Well-behaved callers (the
/// [`AssetStore`](crate::AssetStore)) await each resolution before
/// starting the next.
pub struct HttpAssetResolver {
    client: reqwest::Client,
    scratch: Mutex<Vec<u8>>,
}

impl HttpAssetResolver {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            scratch: Mutex::new(Vec::new()),
        }
    }

    /// Builds a resolver on an existing client, e.g. one with custom
    /// timeouts or proxy settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            scratch: Mutex::new(Vec::new()),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Raster, AssetError> {
        let busted = with_cache_buster(url, clock_nonce());
        log::debug!("fetching asset {busted}");

        let response = self
            .client
            .get(&busted)
            .send()
            .await
            .map_err(|err| AssetError::Fetch {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|err| AssetError::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        })?;

        let mut scratch = self.scratch.lock().await;
        Raster::from_fetched(&bytes, &mut scratch)
    }
}

impl Default for HttpAssetResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetResolver for HttpAssetResolver {
    async fn resolve(&self, source: &AssetSource) -> Result<Raster, AssetError> {
        match source {
            AssetSource::DataUri(uri) => resolve_data_uri(uri),
            AssetSource::Url(url) => self.fetch(url).await,
        }
    }

    fn name(&self) -> &'static str {
        "HttpAssetResolver"
    }
}

fn clock_nonce() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
