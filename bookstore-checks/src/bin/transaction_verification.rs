use bookstore_checks::server::{TransactionVerificationServer, TransactionVerificationService};
use bookstore_shared::{shutdown, telemetry, Config};
use tonic::transport::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("transaction_verification=info,bookstore_checks=info");

    let config = Config::load()?;
    let addr = config.services.transaction_verification_addr()?;
    tracing::info!("TransactionVerification service listening on {}", addr);

    Server::builder()
        .add_service(TransactionVerificationServer::new(TransactionVerificationService))
        .serve_with_shutdown(addr, shutdown::signal())
        .await?;

    Ok(())
}
