//! Learn-Binder main entry point
//!
//! Command-line interface for binding a Microsoft Learn course into merged
//! HTML documents (and optionally PDFs), one per module.

use clap::Parser;
use learn_binder::catalog::{fetch_catalog, CatalogResolver};
use learn_binder::config::{load_config, Config};
use learn_binder::fetch::build_http_client;
use learn_binder::pipeline::CourseProcessor;
use learn_binder::render::PdfRenderer;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Learn-Binder: bind a course's learning paths into offline documents
///
/// Learn-Binder resolves a course through the Microsoft Learn catalog API,
/// merges each module's unit pages into one styled HTML document, and
/// renders each document to PDF with headless Chromium.
#[derive(Parser, Debug)]
#[command(name = "learn-binder")]
#[command(version)]
#[command(about = "Bind a Microsoft Learn course into offline documents", long_about = None)]
struct Cli {
    /// Course URL to bind (defaults to the configured course)
    #[arg(value_name = "COURSE_URL")]
    course_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output directory (overrides the configured base directory)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Skip PDF rendering, generate HTML only
    #[arg(long)]
    no_render: bool,

    /// Resolve and list learning paths without generating anything
    #[arg(long)]
    list_paths: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let course_url = cli
        .course_url
        .clone()
        .unwrap_or_else(|| config.catalog.default_course_url.clone());

    let client = build_http_client(&config.http)?;

    // Catalog failure is the one fatal error: without it every downstream
    // query would be empty.
    let catalog = match fetch_catalog(
        &client,
        &config.catalog.api_url,
        Duration::from_secs(config.http.catalog_timeout_secs),
    )
    .await
    {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to fetch catalog: {}", e);
            return Err(e.into());
        }
    };
    let resolver = CatalogResolver::new(catalog);

    if cli.list_paths {
        return handle_list_paths(&resolver, &course_url);
    }

    let output_base = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.base_dir));

    let renderer = if cli.no_render || !config.render.enabled {
        None
    } else {
        Some(PdfRenderer::new(Duration::from_secs(
            config.render.timeout_secs,
        )))
    };

    let processor = CourseProcessor::new(client, resolver, output_base, renderer);
    processor.process_course(&course_url).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("learn_binder=info,warn"),
            1 => EnvFilter::new("learn_binder=debug,info"),
            2 => EnvFilter::new("learn_binder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --list-paths mode: resolves and prints learning paths
fn handle_list_paths(resolver: &CatalogResolver, course_url: &str) -> anyhow::Result<()> {
    println!("=== Learning paths for {} ===\n", course_url);

    let paths = resolver.course_learning_paths(course_url);
    if paths.is_empty() {
        println!("No learning paths found.");
        return Ok(());
    }

    for (i, path) in paths.iter().enumerate() {
        println!("{}. {}", i + 1, path);

        let modules = resolver.learning_path_modules(path);
        for module in &modules {
            println!("     - {}", module);
        }
    }

    println!("\n{} learning path(s) total", paths.len());

    Ok(())
}
