use routine_tracker::api::auth::SessionRegistry;
use routine_tracker::api::{build_router, AppState};
use routine_tracker::config::Config;
use routine_tracker::lifecycle::{setup_tracing, TrackerSystem};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    if config.tokens.is_empty() {
        warn!("TRACKER_TOKENS is empty; every mutating request will be rejected");
    }

    let system = TrackerSystem::new();
    let state = AppState {
        routine_activities: system.routine_activity_client.clone(),
        routines: system.routine_client.clone(),
        activities: system.activity_client.clone(),
        sessions: SessionRegistry::new(config.tokens.clone()),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Routine tracker listening on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and its client clones) is gone once serve returns; closing
    // our own clients lets the store actors drain and exit.
    system.shutdown().await?;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
