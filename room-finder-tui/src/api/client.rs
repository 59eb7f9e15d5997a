use anyhow::{Context, Result};
use roomdb::domain::{DataFreshness, SearchQuery};
use roomdb::{Credentials, RoomDbClient, SearchResults};

use crate::api::dev_backend::DevBackend;

#[derive(Debug, Clone)]
enum Backend {
    Remote(RoomDbClient),
    Dev(DevBackend),
}

/// The room availability backend the UI talks to: the configured remote
/// project, or an in-memory stand-in for `room-finder dev`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    backend: Backend,
}

impl ApiClient {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self> {
        let client = RoomDbClient::new(base_url, &Credentials::new(anon_key))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;

        Ok(Self {
            backend: Backend::Remote(client),
        })
    }

    pub fn dev() -> Self {
        Self {
            backend: Backend::Dev(DevBackend::new()),
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self.backend, Backend::Dev(_))
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        match &self.backend {
            Backend::Dev(dev) => Ok(dev.search(query)),
            Backend::Remote(client) => client
                .search(query)
                .await
                .context("Failed to fetch free rooms"),
        }
    }

    pub async fn data_freshness(&self) -> DataFreshness {
        match &self.backend {
            Backend::Dev(dev) => dev.data_freshness(),
            Backend::Remote(client) => client.data_freshness().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn invalid_url_is_reported() {
        let err = ApiClient::new("not a url", "").unwrap_err();
        assert!(err.to_string().contains("Invalid API URL"));
    }

    #[tokio::test]
    async fn dev_client_answers_without_network() {
        let client = ApiClient::dev();
        assert!(client.is_dev());
        let query = SearchQuery::new(date!(2025 - 10 - 20), time!(8:00), time!(9:00));
        let results = client.search(&query).await.unwrap();
        assert!(!results.rooms.is_empty());
        assert!(client.data_freshness().await.last_updated.is_some());
    }
}
