//! Polygon and MultiPolygon containment built on the ring test.

use geo::{Coord, Geometry, MultiPolygon, Polygon};

use super::ring::is_point_in_ring;

/// Inside the exterior ring and inside none of the holes.
pub fn is_point_in_polygon(point: Coord<f64>, polygon: &Polygon<f64>) -> bool {
    if !is_point_in_ring(point, polygon.exterior()) {
        return false;
    }
    !polygon
        .interiors()
        .iter()
        .any(|hole| is_point_in_ring(point, hole))
}

/// Inside at least one part.
pub fn is_point_in_multi_polygon(point: Coord<f64>, multi: &MultiPolygon<f64>) -> bool {
    multi.0.iter().any(|polygon| is_point_in_polygon(point, polygon))
}

/// Containment for Polygon and MultiPolygon geometries. Every other geometry
/// kind contains nothing.
pub fn is_point_in_geometry(point: Coord<f64>, geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::Polygon(polygon) => is_point_in_polygon(point, polygon),
        Geometry::MultiPolygon(multi) => is_point_in_multi_polygon(point, multi),
        _ => false,
    }
}
