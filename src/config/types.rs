use serde::Deserialize;

/// Default catalog API endpoint
pub const DEFAULT_CATALOG_API_URL: &str = "https://learn.microsoft.com/api/catalog/";

/// Default course to bind when none is given on the command line
pub const DEFAULT_COURSE_URL: &str =
    "https://learn.microsoft.com/en-us/training/courses/ai-102t00";

/// Default User-Agent header for page and catalog requests
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.0";

/// Main configuration structure for Learn-Binder
///
/// Every section is optional in the TOML file; missing sections and fields
/// fall back to the defaults below, so the tool runs with no config at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-page request timeout (seconds)
    #[serde(rename = "page-timeout-secs", default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Catalog request timeout (seconds); the catalog document is large
    #[serde(rename = "catalog-timeout-secs", default = "default_catalog_timeout")]
    pub catalog_timeout_secs: u64,
}

/// Catalog endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog API endpoint URL
    #[serde(rename = "api-url", default = "default_api_url")]
    pub api_url: String,

    /// Course URL used when none is given on the command line
    #[serde(rename = "default-course-url", default = "default_course_url")]
    pub default_course_url: String,
}

/// Output layout configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Base directory for generated documents
    #[serde(rename = "base-dir", default = "default_base_dir")]
    pub base_dir: String,
}

/// PDF render configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Whether to render a PDF next to each generated HTML document
    #[serde(default = "default_render_enabled")]
    pub enabled: bool,

    /// Hard timeout for a single render (seconds); a hung browser must not
    /// stall the rest of the run
    #[serde(rename = "timeout-secs", default = "default_render_timeout")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_page_timeout() -> u64 {
    30
}

fn default_catalog_timeout() -> u64 {
    60
}

fn default_api_url() -> String {
    DEFAULT_CATALOG_API_URL.to_string()
}

fn default_course_url() -> String {
    DEFAULT_COURSE_URL.to_string()
}

fn default_base_dir() -> String {
    "output".to_string()
}

fn default_render_enabled() -> bool {
    true
}

fn default_render_timeout() -> u64 {
    120
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            page_timeout_secs: default_page_timeout(),
            catalog_timeout_secs: default_catalog_timeout(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_course_url: default_course_url(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: default_render_enabled(),
            timeout_secs: default_render_timeout(),
        }
    }
}
