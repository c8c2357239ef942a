//! Retrieval of boundary documents.

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use url::Url;

use crate::errors::{invalid_request, FirewatchError, Result};

/// Retrieves the raw text of a boundary document by source identifier
pub trait DocumentFetcher: Send + Sync {
    fn fetch<'a>(&'a self, source: &'a str) -> BoxFuture<'a, Result<String>>;
}

/// Fetches `http(s)://` sources with reqwest and `file://` sources from disk
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_url(&self, source: &str) -> Result<String> {
        let url = Url::parse(source)?;
        match url.scheme() {
            "http" | "https" => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FirewatchError::Status {
                        url: source.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| invalid_request(format!("not a local path: {}", source)))?;
                Ok(tokio::fs::read_to_string(path).await?)
            }
            other => Err(invalid_request(format!("unsupported scheme '{}'", other))),
        }
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, source: &'a str) -> BoxFuture<'a, Result<String>> {
        self.fetch_url(source).boxed()
    }
}
