//! TuneGraph — music catalog search that accumulates an artist/album/song graph.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use tunegraph_core::TuneGraphConfig;
use tunegraph_server::{build_router, AppState};

fn print_help() {
    println!("TuneGraph — music catalog graph server");
    println!();
    println!("Usage: tunegraph [command]");
    println!();
    println!("Commands:");
    println!("  (none)    Start the server");
    println!("  help      Show this help message");
    println!();
    println!("Environment:");
    println!("  PORT                          HTTP port (default 5000)");
    println!("  CLIENT_ID / CLIENT_SECRET     Spotify client credentials");
    println!("  SPOTIFY_ACCOUNTS_URL          Accounts service base URL");
    println!("  SPOTIFY_API_URL               Web API base URL");
    println!("  TUNEGRAPH_CHILD_LIMIT         Albums/tracks fetched per entity (1-50)");
    println!("  TUNEGRAPH_HTTP_TIMEOUT_SECS   Catalog request timeout");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'tunegraph help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = TuneGraphConfig::from_env()?;
    let port = config.port;

    let catalog = tunegraph_catalog::create_catalog(&config.spotify)
        .map_err(|e| anyhow::anyhow!("Failed to create catalog client: {}", e))?;
    info!("Catalog backend: {}", catalog.backend());

    // The one graph for this process lives in the state
    let state = Arc::new(AppState::new(config, catalog));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("TuneGraph server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
