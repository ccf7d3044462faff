//! HTTP client for the paginated tickers API.

use reqwest::Client;
use std::time::Duration;

use crate::paginate::FetchError;

/// Configuration for the API client and pagination loop.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Records requested per page.
    pub page_size: u32,
    /// Maximum consecutive rate-limit retries before giving up.
    pub max_retries: u32,
    /// Pause between successive pages.
    pub page_pause: Duration,
    /// Ceiling for a single backoff sleep.
    pub max_backoff: Duration,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_size: 1000,
            max_retries: 6,
            page_pause: Duration::from_secs(1), // stay under the per-minute request budget
            max_backoff: Duration::from_secs(60),
            timeout: Duration::from_secs(30),
            user_agent: format!("tickref/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// One raw page response, before classification.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// HTTP client with connection reuse for sequential page requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new API client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Pages are requested strictly in sequence; one warm connection suffices
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a single page request, returning the status and raw body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on transport-level failures (connection,
    /// timeout). HTTP error statuses are not raised here; they are returned
    /// for classification.
    pub async fn get_page(&self, url: &str) -> Result<PageResponse, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(PageResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.max_retries, 6);
        assert_eq!(config.page_pause, Duration::from_secs(1));
        assert_eq!(config.max_backoff, Duration::from_secs(60));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = ApiClient::with_defaults();
        assert!(client.is_ok());
    }
}
