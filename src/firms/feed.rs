//! FIRMS area-request construction.
//!
//! The area endpoint has the form
//! `{base}/{MAP_KEY}/{SOURCE}/{west},{south},{east},{north}/{DAY_RANGE}`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{invalid_request, Result};

pub const FIRMS_AREA_CSV_URL: &str = "https://firms.modaps.eosdis.nasa.gov/api/area/csv";

/// Largest day window FIRMS serves for the area endpoint
pub const MAX_DAYS: u8 = 10;

/// Satellite product served by FIRMS (near real time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Sensor {
    #[default]
    #[serde(rename = "MODIS_NRT")]
    #[value(name = "modis")]
    ModisNrt,
    #[serde(rename = "VIIRS_SNPP_NRT")]
    #[value(name = "viirs-snpp")]
    ViirsSnppNrt,
    #[serde(rename = "VIIRS_NOAA20_NRT")]
    #[value(name = "viirs-noaa20")]
    ViirsNoaa20Nrt,
}

impl Sensor {
    /// Source identifier used in FIRMS URLs
    pub fn source_id(&self) -> &'static str {
        match self {
            Sensor::ModisNrt => "MODIS_NRT",
            Sensor::ViirsSnppNrt => "VIIRS_SNPP_NRT",
            Sensor::ViirsNoaa20Nrt => "VIIRS_NOAA20_NRT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sensor::ModisNrt => "MODIS",
            Sensor::ViirsSnppNrt => "VIIRS S-NPP",
            Sensor::ViirsNoaa20Nrt => "VIIRS NOAA-20",
        }
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source_id())
    }
}

/// Query rectangle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Nepal's strict bounding box
pub const NEPAL_AREA: Area = Area {
    west: 80.088,
    south: 26.347,
    east: 88.199,
    north: 30.447,
};

impl Default for Area {
    fn default() -> Self {
        NEPAL_AREA
    }
}

impl Area {
    pub fn from_bbox((west, south, east, north): (f64, f64, f64, f64)) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    fn validate(&self) -> Result<()> {
        let finite = [self.west, self.south, self.east, self.north]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.west >= self.east || self.south >= self.north {
            return Err(invalid_request(format!("degenerate area {:?}", self)));
        }
        if self.west < -180.0 || self.east > 180.0 || self.south < -90.0 || self.north > 90.0 {
            return Err(invalid_request(format!("area out of range {:?}", self)));
        }
        Ok(())
    }

    fn path_segment(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

/// One area query: which sensor, which rectangle, how many days back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRequest {
    pub sensor: Sensor,
    pub area: Area,
    pub days: u8,
}

impl AreaRequest {
    pub fn new(sensor: Sensor, area: Area, days: u8) -> Result<Self> {
        if days == 0 || days > MAX_DAYS {
            return Err(invalid_request(format!(
                "day range must be 1..={}, got {}",
                MAX_DAYS, days
            )));
        }
        area.validate()?;
        Ok(Self { sensor, area, days })
    }

    /// Full request URL including the map key
    pub fn url(&self, base_url: &str, map_key: &str) -> Result<Url> {
        if map_key.trim().is_empty() {
            return Err(invalid_request("empty FIRMS map key"));
        }
        let mut url = Url::parse(base_url)?;
        url.path_segments_mut()
            .map_err(|_| invalid_request(format!("{} cannot be a base URL", base_url)))?
            .pop_if_empty()
            .push(map_key.trim())
            .push(self.sensor.source_id())
            .push(&self.area.path_segment())
            .push(&self.days.to_string());
        Ok(url)
    }

    /// Same URL with the map key masked, for logs
    pub fn redacted_url(&self, base_url: &str) -> String {
        match self.url(base_url, "MAP_KEY") {
            Ok(url) => url.to_string(),
            Err(_) => base_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nepal_url() {
        let req = AreaRequest::new(Sensor::ModisNrt, NEPAL_AREA, 1).unwrap();
        let url = req.url(FIRMS_AREA_CSV_URL, "abc123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://firms.modaps.eosdis.nasa.gov/api/area/csv/abc123/MODIS_NRT/80.088,26.347,88.199,30.447/1"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let req = AreaRequest::new(Sensor::ViirsNoaa20Nrt, NEPAL_AREA, 7).unwrap();
        let url = req.url("http://localhost:8080/api/area/csv/", "k").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/area/csv/k/VIIRS_NOAA20_NRT/80.088,26.347,88.199,30.447/7"
        );
    }

    #[test]
    fn test_day_range_validation() {
        assert!(AreaRequest::new(Sensor::ModisNrt, NEPAL_AREA, 0).is_err());
        assert!(AreaRequest::new(Sensor::ModisNrt, NEPAL_AREA, MAX_DAYS + 1).is_err());
        for days in [1, 2, 7, MAX_DAYS] {
            assert!(AreaRequest::new(Sensor::ViirsSnppNrt, NEPAL_AREA, days).is_ok());
        }
    }

    #[test]
    fn test_area_validation() {
        let inverted = Area::from_bbox((88.0, 26.0, 80.0, 30.0));
        assert!(AreaRequest::new(Sensor::ModisNrt, inverted, 1).is_err());
        let nan = Area::from_bbox((f64::NAN, 26.0, 88.0, 30.0));
        assert!(AreaRequest::new(Sensor::ModisNrt, nan, 1).is_err());
        let huge = Area::from_bbox((-200.0, 26.0, 88.0, 30.0));
        assert!(AreaRequest::new(Sensor::ModisNrt, huge, 1).is_err());
    }

    #[test]
    fn test_redacted_url_hides_key() {
        let req = AreaRequest::new(Sensor::ModisNrt, NEPAL_AREA, 2).unwrap();
        let shown = req.redacted_url(FIRMS_AREA_CSV_URL);
        assert!(shown.contains("/MAP_KEY/MODIS_NRT/"));
        assert!(req.url(FIRMS_AREA_CSV_URL, "  ").is_err());
    }

    #[test]
    fn test_sensor_serde_names() {
        let s: Sensor = serde_json::from_str("\"VIIRS_SNPP_NRT\"").unwrap();
        assert_eq!(s, Sensor::ViirsSnppNrt);
        assert_eq!(serde_json::to_string(&Sensor::ModisNrt).unwrap(), "\"MODIS_NRT\"");
        assert_eq!(Sensor::ViirsNoaa20Nrt.label(), "VIIRS NOAA-20");
    }
}
