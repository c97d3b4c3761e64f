use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use anyhow::anyhow;

use uketsuke::{ServerConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    let address = config.address();
    println!("Starting server on {address}");

    // Create application state
    let app_state = AppState::new(config);

    // API routes. CORS is wide open because the kiosk frontend is served
    // from a separate origin.
    let app = Router::new()
        .merge(routes::api::create_api_router())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Create listener
    let listener = TcpListener::bind(&address).await?;

    println!("Server listening on {address}");

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
