//! Boundary providers.
//!
//! `SourceChainProvider` walks an ordered list of boundary documents and
//! keeps the first one holding the target region; if none does, it hands
//! out the embedded fallback outline. Failures are logged, never returned.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::document::{select_geometry, TargetRegion};
use super::fallback::fallback_boundary;
use super::fetch::DocumentFetcher;
use crate::errors::Result;
use crate::models::{Boundary, BoundarySource};

/// Yields the boundary used for geofencing. Never fails.
pub trait BoundaryProvider: Send + Sync {
    fn get_boundary(&self) -> BoxFuture<'_, Arc<Boundary>>;
}

/// Always returns the same boundary
pub struct FixedBoundaryProvider {
    boundary: Arc<Boundary>,
}

impl FixedBoundaryProvider {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            boundary: Arc::new(boundary),
        }
    }

    pub fn fallback() -> Self {
        Self::new(fallback_boundary())
    }
}

impl BoundaryProvider for FixedBoundaryProvider {
    fn get_boundary(&self) -> BoxFuture<'_, Arc<Boundary>> {
        let boundary = Arc::clone(&self.boundary);
        async move { boundary }.boxed()
    }
}

/// Ordered-source resolution, computed once and cached for the lifetime of
/// the provider
pub struct SourceChainProvider<F> {
    fetcher: F,
    sources: Vec<String>,
    target: TargetRegion,
    resolved: OnceCell<Arc<Boundary>>,
}

impl<F: DocumentFetcher> SourceChainProvider<F> {
    pub fn new(fetcher: F, sources: Vec<String>, target: TargetRegion) -> Self {
        Self {
            fetcher,
            sources,
            target,
            resolved: OnceCell::new(),
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Run the source chain without consulting or filling the cache
    pub async fn resolve(&self) -> Boundary {
        for source in &self.sources {
            match self.try_source(source).await {
                Ok(Some(boundary)) => {
                    info!(
                        "Using {} boundary from {} ({} part(s))",
                        self.target.name,
                        source,
                        boundary.part_count()
                    );
                    return boundary;
                }
                Ok(None) => {
                    warn!("No {} boundary in {}", self.target.name, source);
                }
                Err(e) => {
                    warn!("Failed to load boundary from {}: {}", source, e);
                }
            }
        }

        warn!(
            "All {} boundary sources failed, using embedded outline",
            self.sources.len()
        );
        fallback_boundary()
    }

    async fn try_source(&self, source: &str) -> Result<Option<Boundary>> {
        let text = self.fetcher.fetch(source).await?;
        let boundary = select_geometry(&text, &self.target)?.and_then(|geometry| {
            Boundary::new(geometry, BoundarySource::Remote(source.to_string()))
        });
        Ok(boundary)
    }

    /// Cached boundary, resolving on first use. Concurrent first callers
    /// share a single resolution.
    pub async fn boundary(&self) -> Arc<Boundary> {
        self.resolved
            .get_or_init(|| async { Arc::new(self.resolve().await) })
            .await
            .clone()
    }
}

impl<F: DocumentFetcher> BoundaryProvider for SourceChainProvider<F> {
    fn get_boundary(&self) -> BoxFuture<'_, Arc<Boundary>> {
        self.boundary().boxed()
    }
}
