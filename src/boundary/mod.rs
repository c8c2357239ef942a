//! National boundary resolution.
//!
//! Tries an ordered list of GeoJSON documents for the target country and
//! falls back to an embedded outline. The result is computed once per
//! provider and shared as `Arc<Boundary>`.

mod document;
mod fallback;
mod fetch;
mod provider;

pub use document::{select_geometry, TargetRegion, ISO_A3_KEYS, NAME_KEYS};
pub use fallback::{fallback_boundary, NEPAL_OUTLINE};
pub use fetch::{DocumentFetcher, HttpFetcher};
pub use provider::{BoundaryProvider, FixedBoundaryProvider, SourceChainProvider};
