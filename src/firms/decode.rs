//! Header-plus-rows CSV decoding into hotspot records.

use csv::{ReaderBuilder, Trim};
use hashbrown::HashMap;
use std::io::Read;
use tracing::debug;

use crate::errors::Result;
use crate::models::{AttributeValue, GeoPoint, Hotspot};

pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";

/// Decode CSV text. Blank text and header-only text give an empty list.
pub fn decode_csv(text: &str) -> Result<Vec<Hotspot>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    decode_reader(text.trim().as_bytes())
}

/// Decode CSV from any reader.
///
/// Every field is kept as a text attribute. The position is taken from the
/// `latitude`/`longitude` columns and left missing if either does not parse.
/// Short rows only get the attributes they have; surplus fields are dropped.
pub fn decode_reader<R: Read>(reader: R) -> Result<Vec<Hotspot>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let lat_idx = headers.iter().position(|h| h == LATITUDE_COLUMN);
    let lon_idx = headers.iter().position(|h| h == LONGITUDE_COLUMN);

    let mut hotspots = Vec::new();
    let mut unlocated = 0usize;

    for result in csv_reader.records() {
        let record = result?;

        let attributes: HashMap<String, AttributeValue> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), AttributeValue::from(v)))
            .collect();

        let parse = |idx: Option<usize>| -> Option<f64> {
            idx.and_then(|i| record.get(i))
                .and_then(|v| v.parse::<f64>().ok())
        };
        let position = match (parse(lon_idx), parse(lat_idx)) {
            (Some(lon), Some(lat)) => Some(GeoPoint::new(lon, lat)),
            _ => {
                unlocated += 1;
                None
            }
        };

        hotspots.push(Hotspot {
            position,
            attributes,
        });
    }

    debug!(
        "Decoded {} rows ({} without a position)",
        hotspots.len(),
        unlocated
    );

    Ok(hotspots)
}
