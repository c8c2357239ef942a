//! Hand-off of geofenced hotspots to a renderer: GeoJSON or CSV.

use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use std::collections::BTreeSet;
use std::io::Write;

use crate::errors::Result;
use crate::models::{AttributeValue, Boundary, Hotspot};

/// Column order of FIRMS area CSV files; other columns follow alphabetically
pub const FIRMS_COLUMNS: &[&str] = &[
    "latitude",
    "longitude",
    "bright_ti4",
    "brightness",
    "scan",
    "track",
    "acq_date",
    "acq_time",
    "satellite",
    "instrument",
    "confidence",
    "version",
    "bright_ti5",
    "bright_t31",
    "frp",
    "daynight",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Geojson,
    Csv,
}

fn attribute_json(value: &AttributeValue) -> JsonValue {
    match value {
        AttributeValue::Text(s) => JsonValue::from(s.as_str()),
        AttributeValue::Number(n) => JsonValue::from(*n),
    }
}

/// Point feature for a located hotspot; `None` if it has no finite position
pub fn hotspot_feature(hotspot: &Hotspot) -> Option<Feature> {
    let coord = hotspot.coord()?;
    let geometry = geojson::Geometry::new(geojson::Value::Point(vec![coord.x, coord.y]));

    let mut properties: JsonObject = hotspot
        .attributes
        .iter()
        .map(|(k, v)| (k.clone(), attribute_json(v)))
        .collect();
    if let Some(kelvin) = hotspot.brightness() {
        properties
            .entry("brightness_k".to_string())
            .or_insert(JsonValue::from(kelvin));
    }

    Some(Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Polygon/MultiPolygon feature for the boundary, tagged with its source
pub fn boundary_feature(boundary: &Boundary) -> Feature {
    let geometry = geojson::Geometry::new(geojson::Value::from(boundary.geometry()));

    let mut properties = JsonObject::new();
    properties.insert("role".to_string(), JsonValue::from("boundary"));
    properties.insert(
        "source".to_string(),
        JsonValue::from(boundary.source().to_string()),
    );

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Hotspots as point features, optionally preceded by the boundary outline
pub fn feature_collection(hotspots: &[Hotspot], boundary: Option<&Boundary>) -> FeatureCollection {
    let features = boundary
        .map(boundary_feature)
        .into_iter()
        .chain(hotspots.iter().filter_map(hotspot_feature))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn write_geojson<W: Write>(
    writer: W,
    hotspots: &[Hotspot],
    boundary: Option<&Boundary>,
) -> Result<()> {
    serde_json::to_writer_pretty(writer, &feature_collection(hotspots, boundary))?;
    Ok(())
}

/// Union of attribute names, FIRMS columns first
pub fn csv_columns(hotspots: &[Hotspot]) -> Vec<String> {
    let present: BTreeSet<&str> = hotspots
        .iter()
        .flat_map(|h| h.attributes.keys().map(String::as_str))
        .collect();

    let known = FIRMS_COLUMNS.iter().copied().filter(|c| present.contains(c));
    let extra = present.iter().copied().filter(|c| !FIRMS_COLUMNS.contains(c));
    known.chain(extra).map(str::to_string).collect()
}

pub fn write_csv<W: Write>(writer: W, hotspots: &[Hotspot]) -> Result<()> {
    let columns = csv_columns(hotspots);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&columns)?;

    for hotspot in hotspots {
        let row = columns.iter().map(|c| {
            hotspot
                .attribute(c)
                .map(|v| v.to_string())
                .unwrap_or_default()
        });
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_hotspots<W: Write>(
    writer: W,
    format: OutputFormat,
    hotspots: &[Hotspot],
    boundary: Option<&Boundary>,
) -> Result<()> {
    match format {
        OutputFormat::Geojson => write_geojson(writer, hotspots, boundary),
        OutputFormat::Csv => write_csv(writer, hotspots),
    }
}
