use metro_server::config::ServerConfig;
use metro_server::network::{NetworkConfig, NetworkModel, hyderabad_metro};
use metro_server::planner::FareTable;
use metro_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Fail fast on a bad network definition
    let network = NetworkModel::build(&hyderabad_metro(), &NetworkConfig::default())?;

    let state = AppState::new(network, FareTable::default());
    let app = create_router(state);

    let addr = config.socket_addr();
    info!(%addr, "Starting server");
    info!("  GET  /api/metro-stations   - Station catalog");
    info!("  GET  /api/stations/search  - Search station names");
    info!("  POST /api/directions       - Plan a route");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
