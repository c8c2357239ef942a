//! Point-in-polygon geofencing.
//!
//! Ray-casting ring test, polygon/multipolygon composition with holes, and
//! the hotspot filter built on top. Everything here is pure.

mod filter;
mod geometry;
mod ring;

pub use filter::{filter_inside, is_inside, PARALLEL_THRESHOLD};
pub use geometry::{is_point_in_geometry, is_point_in_multi_polygon, is_point_in_polygon};
pub use ring::{is_point_in_ring, RAY_EPSILON};
