//! Catalog fetching and resolution
//!
//! The catalog is a single JSON document with three cross-referenced
//! collections (courses, learning paths, modules). It is fetched once per
//! run and handed to the [`CatalogResolver`] as an owned, immutable value;
//! all traversal queries are dictionary lookups over it.

mod resolver;
mod types;

pub use resolver::{strip_query, trailing_segment, CatalogResolver};
pub use types::{Catalog, Course, LearningPath, Module, StudyGuideRef};

use crate::fetch::fetch_text_with_timeout;
use crate::BinderError;
use reqwest::Client;
use std::time::Duration;

/// Fetches and parses the catalog document
///
/// Failure here is fatal to the run: without the catalog every downstream
/// query would be empty, so the caller aborts instead of producing nothing
/// silently.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `api_url` - Catalog API endpoint
/// * `timeout` - Request timeout (the catalog is a large document)
///
/// # Returns
///
/// * `Ok(Catalog)` - Parsed catalog document
/// * `Err(BinderError)` - Network, HTTP, or JSON parse failure
pub async fn fetch_catalog(
    client: &Client,
    api_url: &str,
    timeout: Duration,
) -> Result<Catalog, BinderError> {
    tracing::info!("Fetching catalog from {}", api_url);
    let body = fetch_text_with_timeout(client, api_url, timeout).await?;
    let catalog: Catalog = serde_json::from_str(&body)?;
    tracing::debug!(
        "Catalog loaded: {} courses, {} learning paths, {} modules",
        catalog.courses.len(),
        catalog.learning_paths.len(),
        catalog.modules.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::fetch::build_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_catalog_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"courses": [], "learningPaths": [], "modules": [{"uid": "m", "url": "u"}]}"#,
            ))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let catalog = fetch_catalog(
            &client,
            &format!("{}/api/catalog/", server.uri()),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(catalog.modules.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_catalog_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let result = fetch_catalog(
            &client,
            &format!("{}/api/catalog/", server.uri()),
            Duration::from_secs(5),
        )
        .await;
        assert!(matches!(result.unwrap_err(), BinderError::CatalogParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let result = fetch_catalog(
            &client,
            &format!("{}/api/catalog/", server.uri()),
            Duration::from_secs(5),
        )
        .await;
        assert!(matches!(result.unwrap_err(), BinderError::Http { .. }));
    }
}
