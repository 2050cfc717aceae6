//! The resolver trait and the network-free implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use base64::Engine as _;

use crate::raster::{Raster, RasterFormat};
use crate::source::AssetSource;
use crate::AssetError;

/// Resolves an asset reference into a raster usable by the drawing surface.
///
/// Implementations must never panic on bad input: every failure maps to an
/// [`AssetError`], which the per-document store records as a terminal
/// `Failed` state. Callers within one document must await each resolution
/// before starting the next; this sequential ordering is part of the
/// contract, not an implementation detail (see
/// [`AssetStore`](crate::AssetStore)).
#[async_trait]
pub trait AssetResolver: Send + Sync {
    /// Resolve a single reference.
    async fn resolve(&self, source: &AssetSource) -> Result<Raster, AssetError>;

    /// Returns a human-readable name for this resolver (for logging).
    fn name(&self) -> &'static str;
}

/// Decodes an embedded `data:` URI into a raster.
///
/// The payload bytes pass through unchanged: no network round-trip, no
/// flattening, no re-encode. Already-embedded assets are round-trip
/// idempotent by construction.
pub fn resolve_data_uri(uri: &str) -> Result<Raster, AssetError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| AssetError::InvalidDataUri("missing data: scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AssetError::InvalidDataUri("missing payload separator".to_string()))?;

    let media_type = match header.strip_suffix(";base64") {
        Some(media_type) => media_type,
        None => {
            return Err(AssetError::InvalidDataUri(
                "only base64 payloads are supported".to_string(),
            ));
        }
    };

    let format = match media_type {
        "image/png" | "" => RasterFormat::Png,
        "image/jpeg" | "image/jpg" => RasterFormat::Jpeg,
        other => {
            return Err(AssetError::InvalidDataUri(format!(
                "unsupported media type '{other}'"
            )));
        }
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|err| AssetError::InvalidDataUri(err.to_string()))?;

    Raster::from_encoded(bytes, format)
}

/// An in-memory asset resolver.
///
/// Remote references are served from a pre-populated map of encoded image
/// bytes; data URIs take the same identity path as every other resolver.
/// Useful for tests and fixtures, and for callers that prefetch their
/// gallery out of band.
#[derive(Debug, Default)]
pub struct InMemoryAssetResolver {
    images: HashMap<String, Vec<u8>>,
}

impl InMemoryAssetResolver {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    /// Registers encoded image bytes under a reference string.
    pub fn add(&mut self, reference: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(reference.into(), bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[async_trait]
impl AssetResolver for InMemoryAssetResolver {
    async fn resolve(&self, source: &AssetSource) -> Result<Raster, AssetError> {
        match source {
            AssetSource::DataUri(uri) => resolve_data_uri(uri),
            AssetSource::Url(url) => {
                let bytes = self
                    .images
                    .get(url)
                    .ok_or_else(|| AssetError::NotFound(url.clone()))?;
                let format = match image::guess_format(bytes) {
                    Ok(image::ImageFormat::Jpeg) => RasterFormat::Jpeg,
                    _ => RasterFormat::Png,
                };
                Raster::from_encoded(bytes.clone(), format)
            }
        }
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetResolver"
    }
}
