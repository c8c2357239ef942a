//! Selection of the target region's geometry from a GeoJSON document.

use geo::Geometry;
use geojson::{Feature, GeoJson};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;

/// Property keys that may carry a country's common name
pub const NAME_KEYS: &[&str] = &["name", "ADMIN", "NAME"];

/// Property keys that may carry an ISO 3166-1 alpha-3 code
pub const ISO_A3_KEYS: &[&str] = &["iso_a3", "ISO_A3", "ISO3166-1-Alpha-3"];

/// The region a boundary document is searched for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRegion {
    pub name: String,
    pub iso_a3: String,
}

impl Default for TargetRegion {
    fn default() -> Self {
        Self {
            name: "Nepal".to_string(),
            iso_a3: "NPL".to_string(),
        }
    }
}

impl TargetRegion {
    pub fn matches(&self, feature: &Feature) -> bool {
        let has = |keys: &[&str], wanted: &str| {
            keys.iter().any(|key| {
                feature
                    .property(key)
                    .and_then(|v| v.as_str())
                    .map(|v| v == wanted)
                    .unwrap_or(false)
            })
        };
        has(NAME_KEYS, &self.name) || has(ISO_A3_KEYS, &self.iso_a3)
    }
}

/// Find the target region's polygonal geometry in a document.
///
/// A `FeatureCollection` is searched for the first matching feature. A lone
/// `Feature` or bare geometry is taken as-is. `Ok(None)` means the document
/// parsed but holds no usable Polygon/MultiPolygon for the target.
pub fn select_geometry(text: &str, target: &TargetRegion) -> Result<Option<Geometry<f64>>> {
    let geojson: GeoJson = text.parse()?;

    let geometry = match geojson {
        GeoJson::FeatureCollection(collection) => {
            let feature = collection.features.into_iter().find(|f| target.matches(f));
            match feature {
                Some(feature) => feature.geometry,
                None => {
                    debug!("No feature matches {:?}", target);
                    None
                }
            }
        }
        GeoJson::Feature(feature) => feature.geometry,
        GeoJson::Geometry(geometry) => Some(geometry),
    };

    let Some(geometry) = geometry else {
        return Ok(None);
    };

    let geometry: Geometry<f64> = geometry.try_into()?;
    match geometry {
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Ok(Some(geometry)),
        other => {
            debug!("Ignoring non-polygonal geometry {:?}", geometry_kind(&other));
            Ok(None)
        }
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
