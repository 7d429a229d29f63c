//! HTTP fetching for catalog and content pages

mod client;

pub use client::{build_http_client, fetch_text, fetch_text_with_timeout};
