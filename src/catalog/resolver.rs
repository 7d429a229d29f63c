//! Catalog traversal: mapping human-facing URLs to catalog records
//!
//! The catalog cross-references its three collections by uid, but users hand
//! us documentation URLs. Resolution works from the trailing path segment of
//! a URL and deliberately uses substring containment rather than exact
//! equality: documentation URLs carry locale prefixes and casing variations
//! that an exact match would miss. First match in collection order wins; the
//! catalog does not guarantee prefix-free identifiers, so callers should be
//! aware that `foo` also matches `foo-extended` if that record comes first.

use crate::catalog::types::Catalog;
use std::collections::HashMap;

/// Study-guide entry type marking a learning path reference
const LEARNING_PATH_TYPE: &str = "learningPath";

/// Resolves course and learning-path URLs against an owned catalog document
///
/// The resolver is constructed once from the fetched catalog and builds its
/// uid → url lookup tables up front. It never touches the network.
pub struct CatalogResolver {
    catalog: Catalog,
    path_urls: HashMap<String, String>,
    module_urls: HashMap<String, String>,
}

impl CatalogResolver {
    /// Creates a resolver owning the given catalog document
    pub fn new(catalog: Catalog) -> Self {
        let path_urls = catalog
            .learning_paths
            .iter()
            .map(|lp| (lp.uid.clone(), lp.url.clone()))
            .collect();

        let module_urls = catalog
            .modules
            .iter()
            .map(|m| (m.uid.clone(), m.url.clone()))
            .collect();

        Self {
            catalog,
            path_urls,
            module_urls,
        }
    }

    /// Returns the learning-path URLs of a course's study guide
    ///
    /// The course is located by case-insensitive substring match of the
    /// course URL's trailing path segment against course uids (first match
    /// wins). Study-guide entries are filtered to learning paths, resolved
    /// through the uid table in study-guide order, and returned with query
    /// parameters stripped. Unresolvable uids are dropped silently.
    ///
    /// # Arguments
    ///
    /// * `course_url` - Human-facing course URL
    ///
    /// # Returns
    ///
    /// Learning-path URLs in study-guide order; empty when the course is
    /// not found (logged) or has no learning paths.
    pub fn course_learning_paths(&self, course_url: &str) -> Vec<String> {
        let course_id = trailing_segment(course_url);
        let course_id_lower = course_id.to_lowercase();

        let course = self
            .catalog
            .courses
            .iter()
            .find(|c| c.uid.to_lowercase().contains(&course_id_lower));

        let Some(course) = course else {
            tracing::warn!("Course '{}' not found in catalog", course_id);
            return Vec::new();
        };

        course
            .study_guide
            .iter()
            .filter(|entry| entry.kind == LEARNING_PATH_TYPE)
            .filter_map(|entry| self.path_urls.get(&entry.uid))
            .filter(|url| !url.is_empty())
            .map(|url| strip_query(url).to_string())
            .collect()
    }

    /// Returns the module URLs of a learning path
    ///
    /// The learning path is located by substring match of the path URL's
    /// trailing segment against learning-path URLs (input order, first match
    /// wins, case-sensitive). Module uids resolve through the uid table in
    /// listed order; query parameters are stripped, unresolved uids dropped.
    ///
    /// # Arguments
    ///
    /// * `path_url` - Human-facing learning-path URL
    pub fn learning_path_modules(&self, path_url: &str) -> Vec<String> {
        let path_name = trailing_segment(path_url);

        let learning_path = self
            .catalog
            .learning_paths
            .iter()
            .find(|lp| lp.url.contains(path_name));

        let Some(learning_path) = learning_path else {
            tracing::debug!("Learning path '{}' not found in catalog", path_name);
            return Vec::new();
        };

        learning_path
            .modules
            .iter()
            .filter_map(|uid| self.module_urls.get(uid))
            .filter(|url| !url.is_empty())
            .map(|url| strip_query(url).to_string())
            .collect()
    }
}

/// Extracts the trailing path segment of a URL, ignoring trailing slashes
pub fn trailing_segment(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Removes the query string (and everything after it) from a URL
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
