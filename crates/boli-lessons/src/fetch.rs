use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use boli_types::ResourceRef;
use reqwest::Url;

use crate::error::FetchError;

/// Fetches lesson resources as text
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, resource: &ResourceRef) -> Result<String, FetchError>;
}

/// Resolves resources against a base URL
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        // Url::join drops the last path segment unless it ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Give up on requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, FetchError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn url_for(&self, resource: &ResourceRef) -> Result<Url, FetchError> {
        self.base_url
            .join(resource.as_str())
            .map_err(|e| FetchError::InvalidUrl(format!("{resource}: {e}")))
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, resource: &ResourceRef) -> Result<String, FetchError> {
        let url = self.url_for(resource)?;
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}

/// Reads resources from a local asset directory
#[derive(Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch(&self, resource: &ResourceRef) -> Result<String, FetchError> {
        let path = self.root.join(resource.as_str());
        tracing::debug!("Reading {}", path.display());
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_keeps_base_path() {
        let fetcher = HttpFetcher::new("https://example.org/assets").unwrap();
        let url = fetcher.url_for(&ResourceRef::new("gujarati/data.json")).unwrap();
        assert_eq!(url.as_str(), "https://example.org/assets/gujarati/data.json");
    }

    #[test]
    fn test_with_timeout_keeps_base_url() {
        let fetcher = HttpFetcher::new("https://example.org/assets/")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .unwrap();
        let url = fetcher.url_for(&ResourceRef::new("data.json")).unwrap();
        assert_eq!(url.as_str(), "https://example.org/assets/data.json");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpFetcher::new("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_file_fetcher_reads_and_reports_missing() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("data.json"), "[]").unwrap();

        let fetcher = FileFetcher::new(tmp.path());
        assert_eq!(fetcher.fetch(&ResourceRef::new("data.json")).await.unwrap(), "[]");
        assert!(matches!(
            fetcher.fetch(&ResourceRef::new("missing.json")).await,
            Err(FetchError::Io(_))
        ));
    }
}
