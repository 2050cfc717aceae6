//! Image asset resolution for the Folio composition engine.
//!
//! An asset is an image reference (remote URL or embedded data URI) plus
//! its per-document resolution state. Resolution turns a reference into a
//! [`Raster`] the drawing surface can embed directly:
//!
//! - data URIs decode their payload and pass it through unchanged,
//! - remote URLs are fetched, decoded, flattened against an opaque white
//!   background and re-encoded as PNG.
//!
//! Failures never escape the resolver boundary as panics or early document
//! aborts: the [`AssetStore`] records them as terminal `Failed` states and
//! renderers omit the affected image.
//!
//! ## Available resolvers
//!
//! - [`HttpAssetResolver`]: fetches remote images over HTTP(S)
//! - [`InMemoryAssetResolver`]: pre-populated fixture storage

use thiserror::Error;

mod http;
mod raster;
mod resolver;
mod source;
mod store;

pub use http::HttpAssetResolver;
pub use raster::{Raster, RasterFormat, SharedRasterData};
pub use resolver::{AssetResolver, InMemoryAssetResolver, resolve_data_uri};
pub use source::{AssetSource, with_cache_buster};
pub use store::{AssetStatus, AssetStore};

/// Error type for asset resolution operations.
///
/// Every variant is terminal for the affected asset within one document
/// generation; callers convert it into a `Failed` status rather than
/// propagating it.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    #[error("Server returned status {status} for '{url}'")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode image data: {0}")]
    Decode(String),

    #[error("Failed to re-encode raster: {0}")]
    Encode(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),
}
