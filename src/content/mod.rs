//! Page content extraction and unit link collection
//!
//! This module turns fetched HTML into [`PageContent`] values (title +
//! cleaned content fragment) and discovers the unit pages belonging to a
//! module. Fetch failures never escape [`fetch_page`]; they become sentinel
//! pages so a single broken unit cannot abort a whole run.

mod extract;
mod units;

pub use extract::{escape_text, extract_page, PageContent};
pub use units::{collect_unit_links, fetch_unit_links};

use crate::fetch::fetch_text;
use reqwest::Client;

/// Fetches a page and extracts its content
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The page URL
///
/// # Returns
///
/// The extracted [`PageContent`]; on fetch failure a sentinel page with
/// title `"Error"` and the (escaped) error message as content.
pub async fn fetch_page(client: &Client, url: &str) -> PageContent {
    match fetch_text(client, url).await {
        Ok(html) => extract_page(&html, url),
        Err(e) => {
            tracing::warn!("Error fetching {}: {}", url, e);
            PageContent::fetch_error(url, &e.to_string())
        }
    }
}
