use bookstore_checks::server::{SuggestionsServer, SuggestionsService};
use bookstore_shared::{shutdown, telemetry, Config};
use tonic::transport::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("suggestions=info,bookstore_checks=info");

    let config = Config::load()?;
    let addr = config.services.suggestions_addr()?;
    tracing::info!("Suggestions service listening on {}", addr);

    Server::builder()
        .add_service(SuggestionsServer::new(SuggestionsService))
        .serve_with_shutdown(addr, shutdown::signal())
        .await?;

    Ok(())
}
