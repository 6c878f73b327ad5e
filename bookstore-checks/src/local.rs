use async_trait::async_trait;
use bookstore_core::{
    Book, CollaboratorError, FraudDetector, FraudVerdict, SuggestionProvider, TransactionVerdict,
    TransactionVerifier,
};

use crate::{fraud, suggestions, transaction};

// In-process collaborators: the same predicates the gRPC servers run,
// without a network hop. They never fail.

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFraudDetector;

#[async_trait]
impl FraudDetector for LocalFraudDetector {
    async fn check_fraud(&self, order_json: &str) -> Result<FraudVerdict, CollaboratorError> {
        Ok(fraud::check_payload(order_json))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTransactionVerifier;

#[async_trait]
impl TransactionVerifier for LocalTransactionVerifier {
    async fn verify_transaction(
        &self,
        order_json: &str,
    ) -> Result<TransactionVerdict, CollaboratorError> {
        Ok(transaction::check_payload(order_json))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSuggestionProvider;

#[async_trait]
impl SuggestionProvider for LocalSuggestionProvider {
    async fn get_suggestions(&self, order_json: &str) -> Result<Vec<Book>, CollaboratorError> {
        Ok(suggestions::suggest_payload(order_json))
    }
}
