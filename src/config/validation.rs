use crate::config::types::{CatalogConfig, Config, HttpConfig, OutputConfig, RenderConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_catalog_config(&config.catalog)?;
    validate_output_config(&config.output)?;
    validate_render_config(&config.render)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.page_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "page-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.catalog_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "catalog-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates catalog endpoint configuration
fn validate_catalog_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    Url::parse(&config.api_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api-url: {}", e)))?;

    Url::parse(&config.default_course_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid default-course-url: {}", e)))?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.base_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "base-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates render configuration
fn validate_render_config(config: &RenderConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "render timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}
