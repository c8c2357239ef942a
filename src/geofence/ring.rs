//! Crossing-number containment test for a single ring.

use geo::{Coord, LineString};

/// Added to the edge's latitude delta so a horizontal edge at the test
/// latitude does not divide by zero. Must stay well below any real latitude
/// delta and above floating-point noise.
pub const RAY_EPSILON: f64 = 1e-12;

/// Is `point` inside `ring`?
///
/// Casts a ray from the point and counts edge crossings; an odd count means
/// inside. Winding order does not matter and the ring may or may not repeat
/// its first vertex at the end.
///
/// Points lying exactly on an edge or vertex get an unspecified answer.
/// Rings with fewer than 3 distinct vertices or with non-finite vertices,
/// and non-finite points, are never inside.
pub fn is_point_in_ring(point: Coord<f64>, ring: &LineString<f64>) -> bool {
    if !point.x.is_finite() || !point.y.is_finite() || !is_usable_ring(ring) {
        return false;
    }

    let (lon, lat) = (point.x, point.y);
    let vertices = &ring.0;
    let mut inside = false;

    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].x, vertices[i].y);
        let (xj, yj) = (vertices[j].x, vertices[j].y);

        let crosses = (yi > lat) != (yj > lat)
            && lon < (xj - xi) * (lat - yi) / (yj - yi + RAY_EPSILON) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}

fn is_usable_ring(ring: &LineString<f64>) -> bool {
    let vertices = &ring.0;
    if vertices.iter().any(|c| !(c.x.is_finite() && c.y.is_finite())) {
        return false;
    }

    // a closing vertex equal to the first does not count
    let open = match (vertices.first(), vertices.last()) {
        (Some(first), Some(last)) if vertices.len() > 1 && first == last => {
            &vertices[..vertices.len() - 1]
        }
        _ => &vertices[..],
    };

    let mut distinct: Vec<&Coord<f64>> = Vec::with_capacity(3);
    for c in open {
        if !distinct.contains(&c) {
            distinct.push(c);
            if distinct.len() >= 3 {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
        LineString::from(coords.to_vec())
    }

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];

    #[test]
    fn test_square() {
        let square = ring(&SQUARE);
        assert!(is_point_in_ring(c(5.0, 5.0), &square));
        assert!(is_point_in_ring(c(0.5, 9.5), &square));
        assert!(!is_point_in_ring(c(15.0, 5.0), &square));
        assert!(!is_point_in_ring(c(5.0, -1.0), &square));
        assert!(!is_point_in_ring(c(-3.0, 5.0), &square));
        assert!(!is_point_in_ring(c(5.0, 11.0), &square));
    }

    #[test]
    fn test_closed_and_open_rings_agree() {
        let open = ring(&SQUARE);
        let mut closed_coords = SQUARE.to_vec();
        closed_coords.push(SQUARE[0]);
        let closed = ring(&closed_coords);

        for p in [c(5.0, 5.0), c(15.0, 5.0), c(2.0, 8.0), c(-1.0, -1.0)] {
            assert_eq!(is_point_in_ring(p, &open), is_point_in_ring(p, &closed));
        }
    }

    #[test]
    fn test_concave_ring() {
        // U shape opening upwards
        let u = ring(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 6.0),
            (4.0, 6.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
        ]);
        assert!(is_point_in_ring(c(1.0, 4.0), &u));
        assert!(is_point_in_ring(c(5.0, 4.0), &u));
        assert!(is_point_in_ring(c(3.0, 1.0), &u));
        assert!(!is_point_in_ring(c(3.0, 4.0), &u));
    }

    #[test]
    fn test_vertex_rotation_does_not_matter() {
        let points = [c(5.0, 5.0), c(15.0, 5.0), c(9.9, 0.1), c(-0.5, 3.0), c(3.3, 10.5)];
        for shift in 0..SQUARE.len() {
            let mut rotated = SQUARE.to_vec();
            rotated.rotate_left(shift);
            let rotated = ring(&rotated);
            for p in points {
                assert_eq!(
                    is_point_in_ring(p, &rotated),
                    is_point_in_ring(p, &ring(&SQUARE)),
                    "shift {} point {:?}",
                    shift,
                    p
                );
            }
        }
    }

    #[test]
    fn test_winding_direction_does_not_matter() {
        let triangle = [(0.0, 0.0), (8.0, 1.0), (3.0, 7.0)];
        let mut reversed = triangle.to_vec();
        reversed.reverse();

        for p in [c(3.0, 2.0), c(7.0, 5.0), c(1.0, 3.0), c(4.0, 0.2), c(-2.0, 2.0)] {
            assert_eq!(
                is_point_in_ring(p, &ring(&triangle)),
                is_point_in_ring(p, &ring(&reversed))
            );
        }
    }

    #[test]
    fn test_horizontal_edge_at_test_latitude() {
        // the top edge lies exactly on lat 10; no panic, no NaN poisoning
        let square = ring(&SQUARE);
        let _ = is_point_in_ring(c(5.0, 10.0), &square);
        assert!(is_point_in_ring(c(5.0, 9.999), &square));
    }

    #[test]
    fn test_degenerate_rings_are_never_inside() {
        assert!(!is_point_in_ring(c(0.0, 0.0), &ring(&[])));
        assert!(!is_point_in_ring(c(0.5, 0.5), &ring(&[(0.0, 0.0), (1.0, 1.0)])));
        // three vertices but only two distinct
        assert!(!is_point_in_ring(
            c(0.5, 0.5),
            &ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])
        ));
        assert!(!is_point_in_ring(
            c(5.0, 5.0),
            &ring(&[(0.0, 0.0), (0.0, 10.0), (f64::NAN, 10.0), (10.0, 0.0)])
        ));
    }

    #[test]
    fn test_non_finite_point() {
        let square = ring(&SQUARE);
        assert!(!is_point_in_ring(c(f64::NAN, 5.0), &square));
        assert!(!is_point_in_ring(c(5.0, f64::INFINITY), &square));
        assert!(!is_point_in_ring(c(f64::NEG_INFINITY, f64::NAN), &square));
    }
}
