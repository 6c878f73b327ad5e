use std::net::SocketAddr;
use bookstore_api::{app, state::AppState};
use bookstore_shared::{shutdown, telemetry, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("bookstore_api=debug,bookstore_order=debug,tower_http=debug,axum::rejection=trace");

    let config = Config::load()?;
    tracing::info!(
        "Starting orchestrator on port {} ({:?} collaborators)",
        config.server.port,
        config.collaborators.mode
    );

    let app_state = AppState::from_config(&config.collaborators)?;
    let app = app(app_state);

    let addr: SocketAddr = config.server.addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}
