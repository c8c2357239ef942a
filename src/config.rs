//! TOML configuration. Every section has defaults, so an empty file (or
//! no file at all) describes the stock Nepal setup.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::boundary::TargetRegion;
use crate::firms::{Area, Sensor, FIRMS_AREA_CSV_URL};

pub const DEFAULT_BOUNDARY_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson",
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries/NPL.geo.json",
    "https://raw.githubusercontent.com/datasets/geo-boundaries-world-110m/master/countries.geojson",
];

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub boundary: BoundaryConfig,
    pub firms: FirmsConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Tried in order; `http(s)://` and `file://` are supported
    pub sources: Vec<String>,
    pub target_name: String,
    pub target_iso_a3: String,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        let target = TargetRegion::default();
        Self {
            sources: DEFAULT_BOUNDARY_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            target_name: target.name,
            target_iso_a3: target.iso_a3,
        }
    }
}

impl BoundaryConfig {
    pub fn target(&self) -> TargetRegion {
        TargetRegion {
            name: self.target_name.clone(),
            iso_a3: self.target_iso_a3.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FirmsConfig {
    pub base_url: String,
    pub map_key: Option<String>,
    pub sensor: Sensor,
    pub days: u8,
    /// west, south, east, north
    pub area: [f64; 4],
}

impl Default for FirmsConfig {
    fn default() -> Self {
        let area = Area::default();
        Self {
            base_url: FIRMS_AREA_CSV_URL.to_string(),
            map_key: None,
            sensor: Sensor::default(),
            days: 1,
            area: [area.west, area.south, area.east, area.north],
        }
    }
}

impl FirmsConfig {
    pub fn area(&self) -> Area {
        let [west, south, east, north] = self.area;
        Area::from_bbox((west, south, east, north))
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("firewatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .user_agent(&self.user_agent)
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .context("Failed to create HTTP client")
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
