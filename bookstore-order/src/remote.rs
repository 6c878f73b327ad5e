//! gRPC-backed collaborators.

use async_trait::async_trait;
use bookstore_core::{
    Book, Collaborator, CollaboratorError, FraudDetector, FraudVerdict, SuggestionProvider,
    TransactionVerdict, TransactionVerifier,
};
use bookstore_proto::fraud_detection::{fraud_detection_client::FraudDetectionClient, FraudCheckRequest};
use bookstore_proto::suggestions::{suggestions_client::SuggestionsClient, SuggestionsRequest};
use bookstore_proto::transaction_verification::{
    transaction_verification_client::TransactionVerificationClient, TransactionVerificationRequest,
};
use bookstore_shared::app_config::CollaboratorConfig;
use std::sync::Arc;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::dispatch::Collaborators;

/// Build gRPC collaborators for the configured addresses. Channels connect
/// lazily, so unreachable services surface as `UNAVAILABLE` per call.
/// Deadlines are enforced by the dispatch coordinator, not per request.
pub fn connect(config: &CollaboratorConfig) -> Result<Collaborators, tonic::transport::Error> {
    let channel = |url: &str| -> Result<Channel, tonic::transport::Error> {
        Ok(Endpoint::from_shared(url.to_owned())?
            .connect_timeout(config.connect_timeout())
            .connect_lazy())
    };

    Ok(Collaborators {
        fraud: Arc::new(GrpcFraudDetector::new(channel(&config.fraud_detection_url)?)),
        transaction: Arc::new(GrpcTransactionVerifier::new(
            channel(&config.transaction_verification_url)?,
        )),
        suggestions: Arc::new(GrpcSuggestionProvider::new(channel(&config.suggestions_url)?)),
    })
}

#[derive(Clone)]
pub struct GrpcFraudDetector {
    client: FraudDetectionClient<Channel>,
}

impl GrpcFraudDetector {
    pub fn new(channel: Channel) -> Self {
        Self { client: FraudDetectionClient::new(channel) }
    }
}

#[async_trait]
impl FraudDetector for GrpcFraudDetector {
    async fn check_fraud(&self, order_json: &str) -> Result<FraudVerdict, CollaboratorError> {
        debug!("Sending fraud check");
        let request = tonic::Request::new(FraudCheckRequest { order_json: order_json.to_owned() });

        let response = self
            .client
            .clone()
            .check_fraud(request)
            .await
            .map_err(|status| rpc_error(Collaborator::FraudDetection, status))?
            .into_inner();

        info!(is_fraud = response.is_fraud, "Fraud check result");
        Ok(response.into())
    }
}

#[derive(Clone)]
pub struct GrpcTransactionVerifier {
    client: TransactionVerificationClient<Channel>,
}

impl GrpcTransactionVerifier {
    pub fn new(channel: Channel) -> Self {
        Self { client: TransactionVerificationClient::new(channel) }
    }
}

#[async_trait]
impl TransactionVerifier for GrpcTransactionVerifier {
    async fn verify_transaction(
        &self,
        order_json: &str,
    ) -> Result<TransactionVerdict, CollaboratorError> {
        debug!("Sending transaction verification");
        let request = tonic::Request::new(TransactionVerificationRequest {
            order_json: order_json.to_owned(),
        });

        let response = self
            .client
            .clone()
            .verify_transaction(request)
            .await
            .map_err(|status| rpc_error(Collaborator::TransactionVerification, status))?
            .into_inner();

        info!(is_valid = response.is_valid, "Transaction verification result");
        Ok(response.into())
    }
}

#[derive(Clone)]
pub struct GrpcSuggestionProvider {
    client: SuggestionsClient<Channel>,
}

impl GrpcSuggestionProvider {
    pub fn new(channel: Channel) -> Self {
        Self { client: SuggestionsClient::new(channel) }
    }
}

#[async_trait]
impl SuggestionProvider for GrpcSuggestionProvider {
    async fn get_suggestions(&self, order_json: &str) -> Result<Vec<Book>, CollaboratorError> {
        debug!("Requesting suggestions");
        let request = tonic::Request::new(SuggestionsRequest { order_json: order_json.to_owned() });

        let response = self
            .client
            .clone()
            .get_suggestions(request)
            .await
            .map_err(|status| rpc_error(Collaborator::Suggestions, status))?
            .into_inner();

        info!(count = response.books.len(), "Suggestions received");
        Ok(response.into())
    }
}

fn rpc_error(collaborator: Collaborator, status: tonic::Status) -> CollaboratorError {
    CollaboratorError::Rpc {
        collaborator,
        code: code_name(status.code()).to_string(),
        message: status.message().to_string(),
    }
}

/// Canonical gRPC status names, as other gRPC stacks print them.
pub fn code_name(code: tonic::Code) -> &'static str {
    use tonic::Code;

    match code {
        Code::Ok => "OK",
        Code::Cancelled => "CANCELLED",
        Code::InvalidArgument => "INVALID_ARGUMENT",
        Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
        Code::NotFound => "NOT_FOUND",
        Code::AlreadyExists => "ALREADY_EXISTS",
        Code::PermissionDenied => "PERMISSION_DENIED",
        Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
        Code::FailedPrecondition => "FAILED_PRECONDITION",
        Code::Aborted => "ABORTED",
        Code::OutOfRange => "OUT_OF_RANGE",
        Code::Unimplemented => "UNIMPLEMENTED",
        Code::Internal => "INTERNAL",
        Code::Unavailable => "UNAVAILABLE",
        Code::DataLoss => "DATA_LOSS",
        Code::Unauthenticated => "UNAUTHENTICATED",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_maps_to_collaborator_error() {
        let err = rpc_error(
            Collaborator::Suggestions,
            tonic::Status::unavailable("connection refused"),
        );

        assert_eq!(err.rpc_code(), Some("UNAVAILABLE"));
        assert_eq!(err.collaborator(), Collaborator::Suggestions);
        assert_eq!(code_name(tonic::Code::DeadlineExceeded), "DEADLINE_EXCEEDED");
        assert_eq!(code_name(tonic::Code::Unknown), "UNKNOWN");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unavailable() {
        let channel = Endpoint::from_static("http://127.0.0.1:1")
            .connect_timeout(Duration::from_millis(500))
            .connect_lazy();
        let provider = GrpcSuggestionProvider::new(channel);

        let err = provider.get_suggestions("{}").await.unwrap_err();
        assert_eq!(err.rpc_code(), Some("UNAVAILABLE"));
    }
}
