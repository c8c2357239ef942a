//! Geofencing of hotspot records against a boundary.

use rayon::prelude::*;
use tracing::debug;

use super::geometry::is_point_in_geometry;
use crate::models::{Boundary, Hotspot};

/// Inputs at least this large are tested on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Is the hotspot located inside the boundary? Records without a finite
/// position never are.
pub fn is_inside(hotspot: &Hotspot, boundary: &Boundary) -> bool {
    hotspot
        .coord()
        .map(|c| is_point_in_geometry(c, boundary.geometry()))
        .unwrap_or(false)
}

/// Copies of the records inside `boundary`, in input order.
pub fn filter_inside(points: &[Hotspot], boundary: &Boundary) -> Vec<Hotspot> {
    let inside: Vec<Hotspot> = if points.len() >= PARALLEL_THRESHOLD {
        points
            .par_iter()
            .filter(|h| is_inside(h, boundary))
            .cloned()
            .collect()
    } else {
        points
            .iter()
            .filter(|h| is_inside(h, boundary))
            .cloned()
            .collect()
    };

    debug!(
        "Geofence ({}): {} of {} hotspots inside",
        boundary.source(),
        inside.len(),
        points.len()
    );

    inside
}
