//! NASA FIRMS active-fire feed: request URLs, CSV decoding and sources.

mod client;
mod decode;
mod feed;

pub use client::{CsvFileSource, FirmsClient, PointSource};
pub use decode::{decode_csv, decode_reader, LATITUDE_COLUMN, LONGITUDE_COLUMN};
pub use feed::{Area, AreaRequest, Sensor, FIRMS_AREA_CSV_URL, MAX_DAYS, NEPAL_AREA};
