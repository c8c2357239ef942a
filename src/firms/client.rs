//! Candidate hotspot sources.

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};

use super::decode::{decode_csv, decode_reader};
use super::feed::AreaRequest;
use crate::errors::{FirewatchError, Result};
use crate::models::Hotspot;

/// Something that delivers decoded, not yet geofenced, hotspots
pub trait PointSource: Send + Sync {
    fn get_candidates(&self) -> BoxFuture<'_, Result<Vec<Hotspot>>>;
}

/// Downloads a FIRMS area CSV
pub struct FirmsClient {
    client: Client,
    base_url: String,
    map_key: String,
    request: AreaRequest,
}

impl FirmsClient {
    pub fn new(client: Client, base_url: &str, map_key: &str, request: AreaRequest) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            map_key: map_key.to_string(),
            request,
        }
    }

    async fn fetch(&self) -> Result<Vec<Hotspot>> {
        let url = self.request.url(&self.base_url, &self.map_key)?;
        info!(
            "Fetching {} hotspots for the last {} day(s): {}",
            self.request.sensor.label(),
            self.request.days,
            self.request.redacted_url(&self.base_url)
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("FIRMS request failed with status {}", status);
            return Err(FirewatchError::Status {
                url: self.request.redacted_url(&self.base_url),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let hotspots = decode_csv(&text)?;
        info!("Received {} candidate hotspots", hotspots.len());
        Ok(hotspots)
    }
}

impl PointSource for FirmsClient {
    fn get_candidates(&self) -> BoxFuture<'_, Result<Vec<Hotspot>>> {
        self.fetch().boxed()
    }
}

/// Reads a previously saved FIRMS CSV from disk
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PointSource for CsvFileSource {
    fn get_candidates(&self) -> BoxFuture<'_, Result<Vec<Hotspot>>> {
        async move {
            info!("Reading hotspots from {}", self.path.display());
            let bytes = tokio::fs::read(&self.path).await?;
            let hotspots = decode_reader(bytes.as_slice())?;
            info!("Read {} candidate hotspots", hotspots.len());
            Ok(hotspots)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firms::feed::{Sensor, NEPAL_AREA};
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a loopback port and returns its base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    fn nepal_request() -> AreaRequest {
        AreaRequest::new(Sensor::ModisNrt, NEPAL_AREA, 1).unwrap()
    }

    #[tokio::test]
    async fn test_csv_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "latitude,longitude,confidence").unwrap();
        writeln!(file, "28.1,84.2,n").unwrap();
        writeln!(file, "x,84.2,l").unwrap();
        file.flush().unwrap();

        let source = CsvFileSource::new(file.path());
        let hotspots = source.get_candidates().await.unwrap();
        assert_eq!(hotspots.len(), 2);
        assert!(hotspots[0].coord().is_some());
        assert!(hotspots[1].coord().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = CsvFileSource::new("/nonexistent/firms.csv");
        assert!(matches!(
            source.get_candidates().await,
            Err(FirewatchError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_firms_download() {
        let base = serve_once(
            "200 OK",
            "latitude,longitude,bright_ti4,confidence\n27.7,85.3,330.1,n\n31.0,85.3,301.0,l\n",
        )
        .await;
        let client = FirmsClient::new(
            local_client(),
            &format!("{}/api/area/csv", base),
            "secret-key",
            nepal_request(),
        );
        let hotspots = client.get_candidates().await.unwrap();
        assert_eq!(hotspots.len(), 2);
        assert!(hotspots[0].coord().is_some());
    }

    #[tokio::test]
    async fn test_firms_error_status_hides_key() {
        let base = serve_once("503 Service Unavailable", "Service Unavailable").await;
        let client = FirmsClient::new(
            local_client(),
            &format!("{}/api/area/csv", base),
            "secret-key",
            nepal_request(),
        );
        match client.get_candidates().await {
            Err(FirewatchError::Status { url, status }) => {
                assert_eq!(status, 503);
                assert!(url.contains("MODIS_NRT"));
                assert!(!url.contains("secret-key"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }
}
