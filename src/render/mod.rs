//! PDF rendering via headless Chromium
//!
//! The assembled HTML document is handed to a headless Chromium instance
//! over CDP (`chromiumoxide`) and printed to an A4 PDF next to the HTML
//! file. The whole operation runs under an explicit timeout so a hung
//! browser cannot stall the traversal; render failures are reported to the
//! caller, which logs them and moves on.

use crate::BinderError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// A4 paper size in inches
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

/// Page margin in inches (~20px at 96dpi)
const MARGIN_IN: f64 = 0.2;

/// Renders assembled HTML documents to PDF
pub struct PdfRenderer {
    timeout: Duration,
}

impl PdfRenderer {
    /// Creates a renderer with the given per-document timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Renders an HTML file to a sibling PDF file
    ///
    /// # Arguments
    ///
    /// * `html_file` - Path to the HTML document to render
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written PDF
    /// * `Err(BinderError)` - Launch failure, CDP error, or timeout
    pub async fn render(&self, html_file: &Path) -> Result<PathBuf, BinderError> {
        let pdf_file = html_file.with_extension("pdf");

        tokio::time::timeout(self.timeout, render_to_pdf(html_file, &pdf_file))
            .await
            .map_err(|_| BinderError::RenderTimeout {
                path: html_file.display().to_string(),
                seconds: self.timeout.as_secs(),
            })??;

        Ok(pdf_file)
    }
}

/// Launches a browser, prints the document, and shuts the browser down
async fn render_to_pdf(html_file: &Path, pdf_file: &Path) -> Result<(), BinderError> {
    // Resolve the file URL before paying for a browser launch.
    let absolute = std::fs::canonicalize(html_file)?;
    let file_url = Url::from_file_path(&absolute).map_err(|_| {
        BinderError::BrowserLaunch(format!("Not a local file path: {}", absolute.display()))
    })?;

    let config = BrowserConfig::builder()
        .build()
        .map_err(BinderError::BrowserLaunch)?;

    let (mut browser, mut handler) = Browser::launch(config).await?;

    // The handler must be polled for the CDP connection to make progress.
    let events = tokio::spawn(async move { while handler.next().await.is_some() {} });

    let result = print_document(&browser, &file_url, pdf_file).await;

    if let Err(e) = browser.close().await {
        tracing::debug!("Browser close failed: {}", e);
    }
    let _ = browser.wait().await;
    events.abort();

    result
}

async fn print_document(
    browser: &Browser,
    file_url: &Url,
    pdf_file: &Path,
) -> Result<(), BinderError> {
    let page = browser.new_page(file_url.as_str()).await?;
    page.wait_for_navigation().await?;
    page.save_pdf(pdf_params(), pdf_file).await?;
    page.close().await?;

    Ok(())
}

fn pdf_params() -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }
}
