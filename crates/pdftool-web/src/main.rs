//! PDFtool Web - HTTP server for merging PDFs and deleting pages.

mod helpers;
mod routes;
mod templates;

use anyhow::Result;
use axum::http::{header, HeaderValue};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Uploads are held in memory while the operation runs
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Resolve the static files directory.
///
/// Priority:
/// 1. Explicit path if provided
/// 2. ./static if it exists
/// 3. Crate's built-in static directory
fn resolve_static_dir(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return PathBuf::from(path);
    }

    // Try ./static first (works in development and when running from crate dir)
    let local_static = PathBuf::from("static");
    if local_static.exists() && local_static.is_dir() {
        return local_static;
    }

    // Fall back to compiled-in path (useful for cargo run)
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

#[derive(Parser, Debug)]
#[command(name = "pdftool-web")]
#[command(author, version, about = "PDFtool Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "PDFTOOL_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "PDFTOOL_PORT", default_value = "8000")]
    port: u16,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Static files directory (defaults to ./static or crate's static dir)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Build router
    let app = Router::new()
        // Pages
        .route("/", get(routes::index))
        // API endpoints - binary responses
        .route("/api/merge", post(routes::merge_pdfs))
        .route("/api/delete-pages", post(routes::delete_pages))
        // API endpoints - JSON
        .route("/api/page-count", post(routes::page_count))
        // Static files with Cache-Control: no-cache (cache but always revalidate)
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                ))
                .service(ServeDir::new(resolve_static_dir(args.static_dir.as_deref()))),
        )
        // Middleware
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
