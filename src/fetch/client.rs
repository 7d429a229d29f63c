//! HTTP client construction and text fetching
//!
//! All requests share one reqwest client with a fixed User-Agent and the
//! per-page timeout. The catalog fetch overrides the timeout per request
//! because the catalog document is much larger than a content page.

use crate::config::HttpConfig;
use crate::BinderError;
use reqwest::Client;
use std::time::Duration;

/// Builds the shared HTTP client from configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration (user agent, timeouts)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.page_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// Non-2xx responses are errors; there is no retry logic anywhere in the
/// tool, callers decide whether a failure is fatal.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(BinderError::Http)` - Network failure, timeout, or error status
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, BinderError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| BinderError::Http {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| BinderError::Http {
        url: url.to_string(),
        source,
    })
}

/// Fetches a URL with an explicit timeout overriding the client default
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
/// * `timeout` - Request timeout for this request only
pub async fn fetch_text_with_timeout(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, BinderError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| BinderError::Http {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| BinderError::Http {
        url: url.to_string(),
        source,
    })
}
