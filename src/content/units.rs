//! Unit link collection
//!
//! A module page links to its unit pages as path-prefixed children of the
//! module URL. The collector gathers those links, deduplicates them, and
//! orders them by the numeric prefix of the last path segment (the site
//! numbers its units `1-introduction`, `2-…`), with plain lexical URL order
//! as a deterministic tie-break for segments without a leading digit.

use crate::fetch::fetch_text;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Collects unit links from a module page's HTML
///
/// Every `a[href]` is resolved against the module URL; query string and
/// fragment are stripped. Only links that strictly extend the module URL
/// as a string prefix are kept (the module page itself is excluded).
///
/// # Arguments
///
/// * `html` - The module page HTML
/// * `module_url` - The module URL links must be children of
///
/// # Returns
///
/// Deduplicated unit URLs in numeric order, non-numeric segments last.
pub fn collect_unit_links(html: &str, module_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(module_url) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let Ok(mut resolved) = base.join(href.trim()) else {
                continue;
            };
            resolved.set_query(None);
            resolved.set_fragment(None);
            let clean = resolved.to_string();

            if clean.starts_with(module_url) && clean != module_url {
                seen.insert(clean);
            }
        }
    }

    let mut links: Vec<String> = seen.into_iter().collect();
    links.sort_by(|a, b| unit_sort_key(a).cmp(&unit_sort_key(b)).then_with(|| a.cmp(b)));
    links
}

/// Fetches a module page and collects its unit links
///
/// A fetch failure is logged and yields an empty list; the caller skips the
/// module and traversal continues.
pub async fn fetch_unit_links(client: &Client, module_url: &str) -> Vec<String> {
    match fetch_text(client, module_url).await {
        Ok(html) => collect_unit_links(&html, module_url),
        Err(e) => {
            tracing::warn!("Error fetching units from {}: {}", module_url, e);
            Vec::new()
        }
    }
}

/// Sort key: the leading decimal digits of the URL's last path segment;
/// segments without a leading digit sort last
fn unit_sort_key(url: &str) -> u64 {
    let segment = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let digits: String = segment
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE_URL: &str = "https://h/training/modules/intro/";

    fn page(links: &[&str]) -> String {
        let anchors: String = links
            .iter()
            .map(|l| format!(r#"<a href="{}">link</a>"#, l))
            .collect();
        format!("<html><body>{}</body></html>", anchors)
    }

    #[test]
    fn test_numeric_ordering_with_non_numeric_last() {
        let html = page(&["2-intro", "10-summary", "1-overview", "notes"]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(
            links,
            vec![
                "https://h/training/modules/intro/1-overview".to_string(),
                "https://h/training/modules/intro/2-intro".to_string(),
                "https://h/training/modules/intro/10-summary".to_string(),
                "https://h/training/modules/intro/notes".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_prefix_children_kept() {
        let html = page(&[
            "1-overview",
            "/training/modules/other/1-overview",
            "https://elsewhere/x",
        ]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(
            links,
            vec!["https://h/training/modules/intro/1-overview".to_string()]
        );
    }

    #[test]
    fn test_module_url_itself_excluded() {
        let html = page(&[".", "1-overview"]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        let html = page(&["1-overview?wt.mc_id=x#section"]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(
            links,
            vec!["https://h/training/modules/intro/1-overview".to_string()]
        );
    }

    #[test]
    fn test_duplicates_collapsed() {
        let html = page(&["1-overview", "1-overview?src=nav", "1-overview#top"]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_non_numeric_tie_break_is_lexical() {
        let html = page(&["zeta", "alpha", "notes"]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(
            links,
            vec![
                "https://h/training/modules/intro/alpha".to_string(),
                "https://h/training/modules/intro/notes".to_string(),
                "https://h/training/modules/intro/zeta".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_links_yields_empty() {
        let links = collect_unit_links("<html><body></body></html>", MODULE_URL);
        assert!(links.is_empty());
    }

    #[test]
    fn test_trailing_slash_segments_sort_numerically() {
        let html = page(&["3-deep/", "1-first/"]);
        let links = collect_unit_links(&html, MODULE_URL);
        assert_eq!(
            links,
            vec![
                "https://h/training/modules/intro/1-first/".to_string(),
                "https://h/training/modules/intro/3-deep/".to_string(),
            ]
        );
    }
}
