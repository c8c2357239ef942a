//! Fire hotspot records as delivered by a satellite feed.

use geo::Coord;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Planar coordinate with x = longitude, y = latitude
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// Opaque attribute value carried through the filter unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Number(_) => None,
        }
    }

    /// Numeric view of the value; text is parsed leniently.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, AttributeValue::Text(s) if s.trim().is_empty())
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

/// A single detection: an optional position plus whatever columns the feed
/// delivered (acq_date, confidence, bright_ti4, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Missing when the feed row had no parseable latitude/longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<GeoPoint>,

    pub attributes: HashMap<String, AttributeValue>,
}

impl Hotspot {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            position: Some(GeoPoint::new(lon, lat)),
            attributes: HashMap::new(),
        }
    }

    /// A record without a usable position
    pub fn unlocated() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Position usable for containment tests, if any
    pub fn coord(&self) -> Option<Coord<f64>> {
        self.position.filter(GeoPoint::is_finite).map(|p| p.coord())
    }

    pub fn acq_date(&self) -> Option<&str> {
        self.attribute("acq_date").and_then(AttributeValue::as_str)
    }

    pub fn confidence(&self) -> Option<&AttributeValue> {
        self.attribute("confidence")
    }

    /// Brightness temperature in Kelvin. VIIRS rows carry `bright_ti4`,
    /// MODIS rows `bright_t31`.
    pub fn brightness(&self) -> Option<f64> {
        ["bright_ti4", "bright_t31"]
            .iter()
            .filter_map(|key| self.attribute(key))
            .filter(|v| !v.is_blank())
            .find_map(AttributeValue::as_f64)
    }
}
