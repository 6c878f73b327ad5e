use bookstore_checks::server::{FraudDetectionServer, FraudDetectionService};
use bookstore_shared::{shutdown, telemetry, Config};
use tonic::transport::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("fraud_detection=info,bookstore_checks=info");

    let config = Config::load()?;
    let addr = config.services.fraud_detection_addr()?;
    tracing::info!("FraudDetection service listening on {}", addr);

    Server::builder()
        .add_service(FraudDetectionServer::new(FraudDetectionService))
        .serve_with_shutdown(addr, shutdown::signal())
        .await?;

    Ok(())
}
