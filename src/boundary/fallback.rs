//! Embedded coarse outline of Nepal, used when no remote source answers.

use geo::{LineString, Polygon};

use crate::models::{Boundary, BoundarySource};

/// Closed exterior ring, (lon, lat)
pub const NEPAL_OUTLINE: [(f64, f64); 38] = [
    (80.05, 30.42),
    (80.3, 30.1),
    (81.0, 30.2),
    (81.5, 30.3),
    (82.0, 30.1),
    (82.5, 29.9),
    (83.0, 29.8),
    (83.5, 29.5),
    (84.0, 29.3),
    (84.5, 28.9),
    (85.0, 28.6),
    (85.5, 28.3),
    (86.0, 28.1),
    (86.5, 27.9),
    (87.0, 27.7),
    (87.5, 27.5),
    (88.0, 27.3),
    (88.2, 27.1),
    (88.1, 26.8),
    (87.8, 26.5),
    (87.5, 26.4),
    (87.0, 26.35),
    (86.5, 26.4),
    (86.0, 26.45),
    (85.5, 26.5),
    (85.0, 26.6),
    (84.5, 26.7),
    (84.0, 26.85),
    (83.5, 27.0),
    (83.0, 27.2),
    (82.5, 27.4),
    (82.0, 27.7),
    (81.5, 28.0),
    (81.0, 28.3),
    (80.5, 28.7),
    (80.2, 29.2),
    (80.05, 29.7),
    (80.05, 30.42),
];

pub fn fallback_boundary() -> Boundary {
    let exterior = LineString::from(NEPAL_OUTLINE.to_vec());
    Boundary::from_polygon(Polygon::new(exterior, vec![]), BoundarySource::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geofence::is_point_in_geometry;
    use geo::Coord;

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(fallback_boundary(), fallback_boundary());
        assert!(fallback_boundary().is_fallback());
    }

    #[test]
    fn test_fallback_covers_nepal() {
        let boundary = fallback_boundary();
        let inside = |lon: f64, lat: f64| {
            is_point_in_geometry(Coord { x: lon, y: lat }, boundary.geometry())
        };

        // Kathmandu, Pokhara, Biratnagar
        assert!(inside(85.324, 27.7172));
        assert!(inside(83.9856, 28.2096));
        assert!(inside(87.2718, 26.4525));

        // Lucknow, Lhasa, Darjeeling
        assert!(!inside(80.9462, 26.8467));
        assert!(!inside(91.1172, 29.6500));
        assert!(!inside(88.2627, 27.0410));
    }
}
