//! Per-document asset state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::raster::Raster;
use crate::resolver::AssetResolver;
use crate::source::AssetSource;

/// Resolution state of one asset within one document generation.
#[derive(Debug, Clone, Default)]
pub enum AssetStatus {
    /// Registered but not yet resolved.
    #[default]
    Pending,
    /// Resolved into a raster the surface can embed.
    Resolved(Arc<Raster>),
    /// Resolution failed; terminal for this generation, no retry.
    Failed(String),
}

/// Tracks every asset referenced by one document.
///
/// Each source resolves at most once per store; a terminal status
/// (`Resolved` or `Failed`) is never revisited. Because [`resolve`]
/// takes `&mut self` and awaits inline, resolutions through one store are
/// strictly sequential, which protects the resolver's shared re-encode
/// backend without any extra locking at this level.
///
/// [`resolve`]: AssetStore::resolve
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: HashMap<String, AssetStatus>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }

    /// Marks `source` as pending if it has no status yet.
    pub fn register(&mut self, source: &AssetSource) {
        self.assets
            .entry(source.as_str().to_string())
            .or_default();
    }

    /// Resolves `source` through `resolver`, at most once per store.
    ///
    /// Failures are recorded, logged and returned as a status; they never
    /// propagate as errors, so one broken image cannot abort a document.
    pub async fn resolve(
        &mut self,
        source: &AssetSource,
        resolver: &dyn AssetResolver,
    ) -> AssetStatus {
        if let Some(status) = self.assets.get(source.as_str()) {
            if !matches!(status, AssetStatus::Pending) {
                return status.clone();
            }
        }

        let status = match resolver.resolve(source).await {
            Ok(raster) => AssetStatus::Resolved(Arc::new(raster)),
            Err(err) => {
                log::warn!(
                    "asset '{}' failed via {}: {err}",
                    source.as_str(),
                    resolver.name()
                );
                AssetStatus::Failed(err.to_string())
            }
        };
        self.assets
            .insert(source.as_str().to_string(), status.clone());
        status
    }

    /// Records an already-resolved raster, e.g. one prefetched out of band.
    pub fn insert_resolved(&mut self, source: &AssetSource, raster: Raster) {
        self.assets.insert(
            source.as_str().to_string(),
            AssetStatus::Resolved(Arc::new(raster)),
        );
    }

    /// Records a terminal failure for `source`.
    pub fn insert_failed(&mut self, source: &AssetSource, reason: impl Into<String>) {
        self.assets.insert(
            source.as_str().to_string(),
            AssetStatus::Failed(reason.into()),
        );
    }

    /// Current status of `source`, if it was ever registered or resolved.
    pub fn status(&self, source: &AssetSource) -> Option<&AssetStatus> {
        self.assets.get(source.as_str())
    }

    /// The resolved raster for `source`, if resolution succeeded.
    pub fn raster(&self, source: &AssetSource) -> Option<Arc<Raster>> {
        match self.assets.get(source.as_str()) {
            Some(AssetStatus::Resolved(raster)) => Some(raster.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
