//! Page content extraction
//!
//! Given a fetched HTML page, this module isolates the primary content
//! region, strips navigational chrome, rewrites relative image references
//! to absolute URLs, and extracts a page title.
//!
//! scraper's DOM is read-only, so cleanup is done during re-serialization:
//! the content subtree is walked and written back out as HTML, skipping the
//! nodes slated for removal and rewriting `<img>` attributes on the way.
//! Extraction is pure; running it twice over the same input yields
//! byte-identical output.

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Title used when a page has no `<h1>`
const UNTITLED: &str = "Untitled";

/// Elements removed entirely, subtrees included
const CHROME_TAGS: &[&str] = &["nav", "aside", "footer"];

/// Class signatures of site UI controls to remove; an element matches a
/// signature when it carries every class in it
const REMOVE_CLASS_SIGNATURES: &[&[&str]] = &[
    &["font-size-sm", "margin-top-md", "display-none-print"],
    &["button", "button-clear", "button-primary", "button-sm", "inner-focus"],
];

/// Any element with a class containing this substring is removed
const REMOVE_CLASS_SUBSTRING: &str = "background-color-body";

/// Void elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is serialized without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Extracted content from a web page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// First `<h1>` text, trimmed; "Untitled" when absent, "Error" for a
    /// failed fetch
    pub title: String,

    /// Cleaned content region serialized as an HTML fragment
    pub content: String,

    /// The source URL the content was extracted from
    pub url: String,
}

impl PageContent {
    /// Builds the sentinel content for a failed page fetch
    ///
    /// Fetch failures never propagate past the fetch boundary; they become
    /// a page whose body names the error, and traversal continues.
    pub fn fetch_error(url: &str, error: &str) -> Self {
        Self {
            title: "Error".to_string(),
            content: format!("<p>Error loading content: {}</p>", escape_text(error)),
            url: url.to_string(),
        }
    }
}

/// Extracts the title and cleaned main content from an HTML page
///
/// The content root is the first `<article>`, else the first `<main>`, else
/// the first element with class `content`. When none exists the content is
/// a placeholder paragraph naming the URL.
///
/// # Arguments
///
/// * `html` - The raw HTML of the page
/// * `url` - The page URL, used to absolutize image references
pub fn extract_page(html: &str, url: &str) -> PageContent {
    let document = Html::parse_document(html);
    let base = Url::parse(url).ok();

    let title = extract_title(&document);
    let content = match find_content_root(&document) {
        Some(root) => serialize_clean(root, base.as_ref()),
        None => format!("<p>Could not extract content from {}</p>", url),
    };

    PageContent {
        title,
        content,
        url: url.to_string(),
    }
}

/// Extracts the page title from the first `<h1>` element
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("h1") else {
        return UNTITLED.to_string();
    };

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Finds the primary content region of the page
fn find_content_root(document: &Html) -> Option<ElementRef<'_>> {
    for selector_str in ["article", "main", ".content"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(root) = document.select(&selector).next() {
                return Some(root);
            }
        }
    }
    None
}

/// Serializes an element subtree to HTML, dropping chrome and rewriting
/// image references against the base URL
fn serialize_clean(root: ElementRef<'_>, base: Option<&Url>) -> String {
    let mut out = String::new();
    serialize_element(root, base, &mut out);
    out
}

fn serialize_element(el: ElementRef<'_>, base: Option<&Url>, out: &mut String) {
    if should_remove(el) {
        return;
    }

    let name = el.value().name();
    let is_img = name == "img";

    out.push('<');
    out.push_str(name);

    for (attr, value) in el.value().attrs() {
        let rewritten;
        let value = if is_img && attr == "src" {
            rewritten = resolve_reference(value, base);
            rewritten.as_str()
        } else if is_img && attr == "srcset" {
            rewritten = rewrite_srcset(value, base);
            rewritten.as_str()
        } else {
            value
        };
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&name);
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    serialize_element(child_el, base, out);
                }
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Decides whether an element (and its whole subtree) is dropped
fn should_remove(el: ElementRef<'_>) -> bool {
    let name = el.value().name();
    if CHROME_TAGS.contains(&name) {
        return true;
    }

    let classes: Vec<&str> = el.value().classes().collect();

    if classes.iter().any(|c| c.contains(REMOVE_CLASS_SUBSTRING)) {
        return true;
    }

    REMOVE_CLASS_SIGNATURES
        .iter()
        .any(|signature| signature.iter().all(|c| classes.contains(c)))
}

/// Resolves a possibly-relative reference against the base URL
///
/// Unresolvable references (or a missing base) are passed through verbatim.
fn resolve_reference(reference: &str, base: Option<&Url>) -> String {
    match base.and_then(|b| b.join(reference).ok()) {
        Some(absolute) => absolute.to_string(),
        None => reference.to_string(),
    }
}

/// Rewrites every candidate URL of a `srcset` attribute, preserving width
/// and density descriptors
fn rewrite_srcset(srcset: &str, base: Option<&Url>) -> String {
    srcset
        .split(',')
        .map(|candidate| {
            let mut parts: Vec<String> = candidate
                .trim()
                .split(' ')
                .map(|p| p.to_string())
                .collect();
            if let Some(first) = parts.first_mut() {
                *first = resolve_reference(first, base);
            }
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escapes text content for HTML
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes an attribute value for a double-quoted HTML attribute
fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
