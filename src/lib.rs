//! Firewatch - satellite fire hotspots geofenced to Nepal
//!
//! This library provides the geofencing core and the boundary/feed collaborators
//! shared by the `hotspots` and `boundary` binaries.

pub mod boundary;
pub mod config;
pub mod errors;
pub mod firms;
pub mod geofence;
pub mod models;
pub mod notify;
pub mod output;

pub use geofence::{filter_inside, is_point_in_geometry, is_point_in_ring};
pub use models::{AttributeValue, Boundary, BoundarySource, Hotspot};
