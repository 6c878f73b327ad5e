use bookstore_proto::fraud_detection::{
    fraud_detection_server::FraudDetection, FraudCheckRequest, FraudCheckResponse,
};
use bookstore_proto::suggestions::{
    suggestions_server::Suggestions, SuggestionsRequest, SuggestionsResponse,
};
use bookstore_proto::transaction_verification::{
    transaction_verification_server::TransactionVerification, TransactionVerificationRequest,
    TransactionVerificationResponse,
};
use tonic::{Request, Response, Status};
use tracing::info;

use crate::{fraud, suggestions, transaction};

pub use bookstore_proto::fraud_detection::fraud_detection_server::FraudDetectionServer;
pub use bookstore_proto::suggestions::suggestions_server::SuggestionsServer;
pub use bookstore_proto::transaction_verification::transaction_verification_server::TransactionVerificationServer;

#[derive(Debug, Default, Clone, Copy)]
pub struct FraudDetectionService;

#[tonic::async_trait]
impl FraudDetection for FraudDetectionService {
    async fn check_fraud(
        &self,
        request: Request<FraudCheckRequest>,
    ) -> Result<Response<FraudCheckResponse>, Status> {
        info!("Fraud check request received");
        let verdict = fraud::check_payload(&request.into_inner().order_json);
        info!(is_fraud = verdict.is_fraud, reason = %verdict.reason, "Fraud check result");
        Ok(Response::new(verdict.into()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionVerificationService;

#[tonic::async_trait]
impl TransactionVerification for TransactionVerificationService {
    async fn verify_transaction(
        &self,
        request: Request<TransactionVerificationRequest>,
    ) -> Result<Response<TransactionVerificationResponse>, Status> {
        info!("Transaction verification request received");
        let verdict = transaction::check_payload(&request.into_inner().order_json);
        info!(is_valid = verdict.is_valid, reason = %verdict.reason, "Transaction verification result");
        Ok(Response::new(verdict.into()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestionsService;

#[tonic::async_trait]
impl Suggestions for SuggestionsService {
    async fn get_suggestions(
        &self,
        request: Request<SuggestionsRequest>,
    ) -> Result<Response<SuggestionsResponse>, Status> {
        info!("Suggestions request received");
        let books = suggestions::suggest_payload(&request.into_inner().order_json);
        info!(count = books.len(), "Returning suggestions");
        Ok(Response::new(books.into()))
    }
}
