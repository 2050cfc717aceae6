//! Asset references: remote URLs and embedded data URIs.

use serde::{Deserialize, Serialize};

/// An image reference as it appears in a content block.
///
/// The two variants carry the reference verbatim; classification happens
/// once, on construction, by scheme prefix. The reference string doubles
/// as the deduplication key in the [`AssetStore`](crate::AssetStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetSource {
    /// A remote resource, fetched over the network.
    Url(String),
    /// An embedded `data:` URI, resolved without any network round-trip.
    DataUri(String),
}

impl AssetSource {
    /// Classifies `reference` by its scheme prefix.
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        if reference.starts_with("data:") {
            Self::DataUri(reference)
        } else {
            Self::Url(reference)
        }
    }

    /// The reference string exactly as supplied.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(s) | Self::DataUri(s) => s,
        }
    }

    /// `true` when resolving this source requires a network fetch.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl From<String> for AssetSource {
    fn from(reference: String) -> Self {
        Self::new(reference)
    }
}

impl From<AssetSource> for String {
    fn from(source: AssetSource) -> Self {
        match source {
            AssetSource::Url(s) | AssetSource::DataUri(s) => s,
        }
    }
}

impl From<&str> for AssetSource {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// Appends a cache-busting query parameter to genuine HTTP(S) URLs.
///
/// Other URI schemes pass through untouched; a busted query would corrupt
/// them. Stale cross-origin cache entries without permissive headers are
/// the reason remote fetches never reuse a cached response.
pub fn with_cache_buster(url: &str, nonce: u64) -> String {
    let lowered = url.to_ascii_lowercase();
    if !lowered.starts_with("http://") && !lowered.starts_with("https://") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}cb={nonce}")
}
