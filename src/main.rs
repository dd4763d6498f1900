//! Redirect server that maps request paths to URLs.
//!
//! Rules come from inline `--redirect` flags, a YAML file and a JSON file.
//! JSON rules are consulted first, then YAML, then inline rules; anything
//! left unmatched gets a plain greeting.

use std::{path::Path, sync::Arc};

use tokio::fs;
use tracing::{Level, error, info};
use urlshort::{
    cli::Cli,
    config::{build_map, json_handler, yaml_handler},
    error::ConfigParseError,
    handlers::{Handler, app, handler_fn, hello, map_handler},
    state::AppState,
};

/// Reads a rule file and layers its handler over `fallback`, exiting on failure
async fn load_rules<H>(
    path: &Path,
    fallback: Box<dyn Handler>,
    build: fn(&[u8], Box<dyn Handler>) -> Result<H, ConfigParseError>,
) -> Box<dyn Handler>
where
    H: Handler + 'static,
{
    let bytes = fs::read(path).await.unwrap_or_else(|e| {
        error!("Failed to read {:?}: {}", path, e);
        std::process::exit(1);
    });
    match build(&bytes, fallback) {
        Ok(handler) => {
            info!("Loaded redirect rules from {:?}", path);
            Box::new(handler)
        }
        Err(e) => {
            error!("Failed to load {:?}: {}", path, e);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();

    let mut handler: Box<dyn Handler> = Box::new(handler_fn(hello));
    if !args.redirects.is_empty() {
        handler = Box::new(map_handler(build_map(args.redirects), handler));
    }
    if let Some(path) = &args.yaml {
        handler = load_rules(path, handler, yaml_handler).await;
    }
    if let Some(path) = &args.json {
        handler = load_rules(path, handler, json_handler).await;
    }

    let state = Arc::new(AppState {
        handler: Arc::from(handler),
    });

    info!("Server running on: http://{}", args.bind);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind {}: {}", args.bind, e);
            std::process::exit(1);
        });
    axum::serve(listener, app(state)).await.unwrap();
}
