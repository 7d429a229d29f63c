//! Course processing pipeline
//!
//! The orchestrator walks the course tree linearly: resolve learning paths,
//! create one directory per path, resolve each path's modules, collect each
//! module's units, assemble the merged document, and optionally render it
//! to PDF. There is no backtracking and no parallelism; per-item failures
//! are logged and traversal continues with the next sibling. Only a missing
//! catalog (handled before this module runs) or an empty learning-path list
//! ends a run early.

use crate::assemble::{assemble_module_document, sanitize_title};
use crate::catalog::{trailing_segment, CatalogResolver};
use crate::content::{fetch_page, fetch_unit_links};
use crate::render::PdfRenderer;
use crate::BinderError;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Walks a course and generates all output files
pub struct CourseProcessor {
    client: Client,
    resolver: CatalogResolver,
    output_base: PathBuf,
    renderer: Option<PdfRenderer>,
}

impl CourseProcessor {
    /// Creates a processor
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client
    /// * `resolver` - Resolver over the already-fetched catalog
    /// * `output_base` - Base directory for all generated files
    /// * `renderer` - PDF renderer, or `None` to skip rendering
    pub fn new(
        client: Client,
        resolver: CatalogResolver,
        output_base: PathBuf,
        renderer: Option<PdfRenderer>,
    ) -> Self {
        Self {
            client,
            resolver,
            output_base,
            renderer,
        }
    }

    /// Processes a course end to end
    ///
    /// # Arguments
    ///
    /// * `course_url` - Human-facing course URL
    ///
    /// # Returns
    ///
    /// The resolved learning-path URLs (empty when none were found).
    pub async fn process_course(&self, course_url: &str) -> Result<Vec<String>, BinderError> {
        tracing::info!("Fetching learning paths from: {}", course_url);

        let paths = self.resolver.course_learning_paths(course_url);
        if paths.is_empty() {
            tracing::warn!("No learning paths found");
            return Ok(Vec::new());
        }

        tracing::info!("Found {} learning path(s):", paths.len());
        for (i, path) in paths.iter().enumerate() {
            tracing::info!("  {}. {}", i + 1, path);
        }

        std::fs::create_dir_all(&self.output_base)?;

        for (i, path_url) in paths.iter().enumerate() {
            if let Err(e) = self.process_learning_path(path_url, i + 1).await {
                tracing::error!("Learning path {} failed: {}", path_url, e);
            }
        }

        tracing::info!("All done! Output is in '{}'", self.output_base.display());

        Ok(paths)
    }

    /// Processes one learning path: directory creation plus all its modules
    async fn process_learning_path(&self, path_url: &str, index: usize) -> Result<(), BinderError> {
        tracing::info!("Fetching learning path page: {}", path_url);

        let path_page = fetch_page(&self.client, path_url).await;
        let dir_name = format!("{:02}-{}", index, sanitize_title(&path_page.title));
        let path_dir = self.output_base.join(dir_name);

        std::fs::create_dir_all(&path_dir)?;
        tracing::info!("Learning path: {}", path_page.title);
        tracing::info!("Created: {}/", path_dir.display());

        let modules = self.resolver.learning_path_modules(path_url);
        if modules.is_empty() {
            tracing::info!("No modules found for this learning path");
            return Ok(());
        }

        for (j, module_url) in modules.iter().enumerate() {
            if let Err(e) = self.process_module(module_url, j + 1, &path_dir).await {
                tracing::error!("Module {} failed: {}", module_url, e);
            }
        }

        Ok(())
    }

    /// Processes one module: unit collection, assembly, optional render
    async fn process_module(
        &self,
        module_url: &str,
        index: usize,
        path_dir: &Path,
    ) -> Result<(), BinderError> {
        tracing::info!("Module: {}", trailing_segment(module_url));

        let unit_links = fetch_unit_links(&self.client, module_url).await;
        if unit_links.is_empty() {
            tracing::info!("No units found for this module");
            return Ok(());
        }
        tracing::info!("Found {} unit(s)", unit_links.len());

        let number_prefix = format!("{:02}", index);
        let html_file = assemble_module_document(
            &self.client,
            module_url,
            &unit_links,
            path_dir,
            &number_prefix,
        )
        .await?;
        tracing::info!("Generated: {}", html_file.display());

        if let Some(renderer) = &self.renderer {
            match renderer.render(&html_file).await {
                Ok(pdf_file) => tracing::info!("Generated: {}", pdf_file.display()),
                Err(e) => tracing::warn!("Failed to generate PDF: {}", e),
            }
        }

        Ok(())
    }
}
