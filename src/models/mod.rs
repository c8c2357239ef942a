//! Core data models for hotspot geofencing.

pub mod boundary;
pub mod hotspot;

pub use boundary::{Boundary, BoundarySource};
pub use hotspot::{AttributeValue, GeoPoint, Hotspot};
