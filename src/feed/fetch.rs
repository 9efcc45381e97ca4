use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use super::types::FeedError;

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Bytes,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// Transport boundary: hand back the status and the whole body.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FeedError>;
}

pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl FeedFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FeedError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(FetchResponse { status, body })
    }
}

/// Reads a saved feed from disk; the `url` argument is ignored.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[async_trait]
impl FeedFetcher for FileFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchResponse, FeedError> {
        let body = tokio::fs::read(&self.path).await.map_err(FeedError::Io)?;
        Ok(FetchResponse { status: 200, body: Bytes::from(body) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn http_fetcher_reports_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let ok = server.mock("GET", "/feed.xml").with_status(200).with_body("<rss/>").create_async().await;
        let gone = server.mock("GET", "/gone.xml").with_status(404).create_async().await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let resp = fetcher.fetch(&format!("{}/feed.xml", server.url())).await.unwrap();
        assert!(resp.is_success());
        assert_eq!(&resp.body[..], b"<rss/>");

        let resp = fetcher.fetch(&format!("{}/gone.xml", server.url())).await.unwrap();
        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());

        ok.assert_async().await;
        gone.assert_async().await;
    }

    #[tokio::test]
    async fn file_fetcher_missing_file_is_io_error() {
        let fetcher = FileFetcher::new("/definitely/not/here.xml");
        assert!(matches!(fetcher.fetch("").await, Err(FeedError::Io(_))));
    }
}
