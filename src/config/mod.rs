//! Configuration module for Learn-Binder
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a default, so a config file is optional; the CLI
//! only passes one through when the user supplies `--config`.
//!
//! # Example
//!
//! ```no_run
//! use learn_binder::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("learn-binder.toml")).unwrap();
//! println!("Output goes to: {}", config.output.base_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CatalogConfig, Config, HttpConfig, OutputConfig, RenderConfig, DEFAULT_CATALOG_API_URL,
    DEFAULT_COURSE_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::load_config;
