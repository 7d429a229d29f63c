use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.http.page_timeout_secs, 30);
        assert_eq!(config.http.catalog_timeout_secs, 60);
        assert_eq!(config.output.base_dir, "output");
        assert!(config.render.enabled);
    }

    #[test]
    fn test_load_partial_config() {
        let file = create_temp_config(
            r#"
            [output]
            base-dir = "./bound-courses"

            [render]
            enabled = false
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.output.base_dir, "./bound-courses");
        assert!(!config.render.enabled);
        // Untouched sections keep their defaults
        assert_eq!(
            config.catalog.api_url,
            "https://learn.microsoft.com/api/catalog/"
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("[http\nbroken");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = create_temp_config("[http]\nmax-retries = 3\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/learn-binder.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let file = create_temp_config("[catalog]\napi-url = \"not a url\"\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidUrl(_)));
    }
}
