//! Library error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FirewatchError>;

#[derive(Error, Debug)]
pub enum FirewatchError {
    #[error("IO error {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid URL {0}")]
    Url(#[from] url::ParseError),

    #[error("CSV error {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON error {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("serde error {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub fn invalid_request(msg: impl ToString) -> FirewatchError {
    FirewatchError::InvalidRequest(msg.to_string())
}
