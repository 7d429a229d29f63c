//! Learn-Binder: a course catalog scraper and document binder
//!
//! This crate walks a Microsoft Learn course (course → learning paths →
//! modules → units), merges each module's unit pages into a single styled
//! HTML document per module, and optionally renders that document to PDF
//! with a headless Chromium instance.

pub mod assemble;
pub mod catalog;
pub mod config;
pub mod content;
pub mod fetch;
pub mod pipeline;
pub mod render;

use thiserror::Error;

/// Main error type for Learn-Binder operations
#[derive(Debug, Error)]
pub enum BinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("Failed to launch browser: {0}")]
    BrowserLaunch(String),

    #[error("Render timed out after {seconds}s for {path}")]
    RenderTimeout { path: String, seconds: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Learn-Binder operations
pub type Result<T> = std::result::Result<T, BinderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogResolver};
pub use config::Config;
pub use content::PageContent;
pub use pipeline::CourseProcessor;
