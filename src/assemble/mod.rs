//! Document assembly
//!
//! Concatenates a module's unit pages into one styled HTML document and
//! writes it to disk. Each unit becomes a numbered section with a heading,
//! a link back to the source page, and the extracted content body. The
//! write is a single `fs::write` call; there is no partial-file cleanup
//! because the output is consumed by a one-shot batch run.

use crate::content::{escape_text, fetch_page, PageContent};
use crate::BinderError;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Stylesheet embedded in every generated document
const HTML_STYLES: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; line-height: 1.6; }
    h1 { color: #0078d4; border-bottom: 2px solid #0078d4; padding-bottom: 10px; }
    h2 { color: #333; margin-top: 40px; border-bottom: 1px solid #ddd; padding-bottom: 8px; }
    .section { margin-bottom: 40px; }
    .section-header { background: #f5f5f5; padding: 15px; border-radius: 5px; margin-bottom: 20px; }
    .section-header a { color: #0078d4; text-decoration: none; }
    .section-header a:hover { text-decoration: underline; }
    img { max-width: 100%; height: auto; }
    pre { background: #f4f4f4; padding: 15px; overflow-x: auto; border-radius: 5px; }
    code { background: #f4f4f4; padding: 2px 5px; border-radius: 3px; }
    table { border-collapse: collapse; width: 100%; margin: 15px 0; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
    th { background: #f5f5f5; }
    .NOTE, .TIP { padding: 12px 15px; margin: 15px 0; border-radius: 5px; border-left: 4px solid; }
    .NOTE { background-color: #e7f3ff; border-color: #0078d4; }
    .NOTE > p:first-child { font-weight: bold; color: #0078d4; margin-top: 0; }
    .TIP { background-color: #e8f5e9; border-color: #4caf50; }
    .TIP > p:first-child { font-weight: bold; color: #2e7d32; margin-top: 0; }
"#;

/// Characters replaced with `_` in file and directory names
const INVALID_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum length of a sanitized file or directory name component
const MAX_NAME_LEN: usize = 100;

/// Fetches a module and its units and writes the merged document
///
/// The module page supplies the document title; each unit link (in the
/// order provided) becomes one numbered section.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `module_url` - The module page URL
/// * `unit_links` - Ordered unit URLs, as produced by the collector
/// * `output_dir` - Directory the document is written into
/// * `number_prefix` - Filename prefix (e.g. `"03"`)
///
/// # Returns
///
/// The path of the written HTML file.
pub async fn assemble_module_document(
    client: &Client,
    module_url: &str,
    unit_links: &[String],
    output_dir: &Path,
    number_prefix: &str,
) -> Result<PathBuf, BinderError> {
    let module_page = fetch_page(client, module_url).await;

    let mut sections = Vec::with_capacity(unit_links.len());
    for (index, link) in unit_links.iter().enumerate() {
        let unit_page = fetch_page(client, link).await;
        sections.push(build_section(index + 1, &unit_page));
    }

    let document = build_document(&module_page.title, &sections);
    let filename = format!("{}-{}.html", number_prefix, sanitize_title(&module_page.title));
    let output_file = output_dir.join(filename);

    std::fs::write(&output_file, document)?;

    Ok(output_file)
}

/// Builds a single unit section
pub fn build_section(index: usize, page: &PageContent) -> String {
    format!(
        r#"
    <div class="section">
        <div class="section-header">
            <h2>{index}. {title}</h2>
            <a href="{url}">{url}</a>
        </div>
        <div class="content">{content}</div>
    </div>"#,
        index = index,
        title = escape_text(&page.title),
        url = page.url,
        content = page.content,
    )
}

/// Builds the complete HTML document around the given sections
pub fn build_document(title: &str, sections: &[String]) -> String {
    let title = escape_text(title);
    let sections_html = sections.join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <h1>{title}</h1>
{sections_html}
</body>
</html>"#,
        title = title,
        styles = HTML_STYLES,
        sections_html = sections_html,
    )
}

/// Sanitizes a title into a file or directory name component
///
/// Filesystem-reserved characters become `_`, leading/trailing spaces and
/// dots are trimmed, and the result is truncated to 100 characters.
pub fn sanitize_title(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if INVALID_NAME_CHARS.contains(&c) { '_' } else { c })
        .collect();

    replaced
        .trim_matches(|c| c == ' ' || c == '.')
        .chars()
        .take(MAX_NAME_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::fetch::build_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_sanitize_replaces_invalid_chars() {
        assert_eq!(sanitize_title("A:B/C*D"), "A_B_C_D");
    }

    #[test]
    fn test_sanitize_trims_spaces_and_dots() {
        assert_eq!(sanitize_title("  . Intro . "), "Intro");
    }

    #[test]
    fn test_sanitize_truncates_to_100_chars() {
        let long: String = "x".repeat(150);
        assert_eq!(sanitize_title(&long).chars().count(), 100);
    }

    #[test]
    fn test_sanitize_all_reserved_chars() {
        assert_eq!(sanitize_title(r#"<>:"/\|?*"#), "_________");
    }

    #[test]
    fn test_build_section_numbers_and_links() {
        let page = PageContent {
            title: "Unit One".to_string(),
            content: "<p>body</p>".to_string(),
            url: "https://h/m/1-one".to_string(),
        };
        let section = build_section(3, &page);
        assert!(section.contains("<h2>3. Unit One</h2>"));
        assert!(section.contains(r#"<a href="https://h/m/1-one">https://h/m/1-one</a>"#));
        assert!(section.contains(r#"<div class="content"><p>body</p></div>"#));
    }

    #[test]
    fn test_build_document_shell() {
        let doc = build_document("My Module", &["<div>s1</div>".to_string()]);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>My Module</title>"));
        assert!(doc.contains("<h1>My Module</h1>"));
        assert!(doc.contains("<div>s1</div>"));
        assert!(doc.contains(".section-header"));
    }

    #[test]
    fn test_build_document_escapes_title() {
        let doc = build_document("Tips & Tricks", &[]);
        assert!(doc.contains("<title>Tips &amp; Tricks</title>"));
    }

    #[tokio::test]
    async fn test_assemble_writes_numbered_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/module/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><article><h1>Intro: Basics</h1></article></body></html>",
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/module/1-first"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><article><h1>First</h1><p>one</p></article></body></html>",
            ))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let module_url = format!("{}/module/", server.uri());
        let units = vec![format!("{}/module/1-first", server.uri())];

        let file = assemble_module_document(&client, &module_url, &units, dir.path(), "02")
            .await
            .unwrap();

        assert_eq!(
            file.file_name().unwrap().to_str().unwrap(),
            "02-Intro_ Basics.html"
        );
        let written = std::fs::read_to_string(&file).unwrap();
        // The document title keeps the original characters; only the
        // filename is sanitized.
        assert!(written.contains("<h1>Intro: Basics</h1>"));
        assert!(written.contains("<h2>1. First</h2>"));
        assert!(written.contains("<p>one</p>"));
    }
}
