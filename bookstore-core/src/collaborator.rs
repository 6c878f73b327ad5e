use async_trait::async_trait;
use std::fmt;

use crate::error::CollaboratorError;
use crate::verdict::{Book, FraudVerdict, TransactionVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    FraudDetection,
    TransactionVerification,
    Suggestions,
}

impl Collaborator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collaborator::FraudDetection => "fraud_detection",
            Collaborator::TransactionVerification => "transaction_verification",
            Collaborator::Suggestions => "suggestions",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Each collaborator receives the serialized order, `orderId` included, and
// must treat it as read-only.

#[async_trait]
pub trait FraudDetector: Send + Sync {
    async fn check_fraud(&self, order_json: &str) -> Result<FraudVerdict, CollaboratorError>;
}

#[async_trait]
pub trait TransactionVerifier: Send + Sync {
    async fn verify_transaction(
        &self,
        order_json: &str,
    ) -> Result<TransactionVerdict, CollaboratorError>;
}

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// At most three books, in catalog traversal order.
    async fn get_suggestions(&self, order_json: &str) -> Result<Vec<Book>, CollaboratorError>;
}
