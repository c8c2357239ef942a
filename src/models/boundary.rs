//! National boundary geometry and where it came from.

use geo::{BoundingRect, Geometry, Polygon};

/// Origin of a resolved boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundarySource {
    /// Remote document identifier (usually a URL)
    Remote(String),
    /// Embedded coarse outline
    Fallback,
}

impl std::fmt::Display for BoundarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundarySource::Remote(id) => write!(f, "{}", id),
            BoundarySource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A Polygon or MultiPolygon boundary. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    geometry: Geometry<f64>,
    source: BoundarySource,
}

impl Boundary {
    /// Returns `None` for anything that is not a Polygon or MultiPolygon.
    pub fn new(geometry: Geometry<f64>, source: BoundarySource) -> Option<Self> {
        match geometry {
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {
                Some(Self { geometry, source })
            }
            _ => None,
        }
    }

    pub fn from_polygon(polygon: Polygon<f64>, source: BoundarySource) -> Self {
        Self {
            geometry: Geometry::Polygon(polygon),
            source,
        }
    }

    pub fn geometry(&self) -> &Geometry<f64> {
        &self.geometry
    }

    pub fn source(&self) -> &BoundarySource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == BoundarySource::Fallback
    }

    /// Number of disconnected parts
    pub fn part_count(&self) -> usize {
        match &self.geometry {
            Geometry::MultiPolygon(mp) => mp.0.len(),
            _ => 1,
        }
    }

    /// Get the bounding box of this boundary as (west, south, east, north)
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.geometry
            .bounding_rect()
            .map(|rect| (rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }
}
