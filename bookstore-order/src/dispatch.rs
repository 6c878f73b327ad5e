use bookstore_core::{
    Book, Collaborator, CollaboratorError, FraudDetector, FraudVerdict, SuggestionProvider,
    TransactionVerdict, TransactionVerifier,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CheckoutError;
use crate::validation::ValidatedOrder;

/// The three services every checkout fans out to.
#[derive(Clone)]
pub struct Collaborators {
    pub fraud: Arc<dyn FraudDetector>,
    pub transaction: Arc<dyn TransactionVerifier>,
    pub suggestions: Arc<dyn SuggestionProvider>,
}

/// Verdicts gathered for one order, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub order_id: Uuid,
    pub fraud: FraudVerdict,
    pub transaction: TransactionVerdict,
    pub suggestions: Vec<Book>,
}

/// Sends one order to all collaborators at once and joins the answers.
pub struct DispatchCoordinator {
    collaborators: Collaborators,
    timeout: Duration,
}

impl DispatchCoordinator {
    pub fn new(collaborators: Collaborators, timeout: Duration) -> Self {
        Self { collaborators, timeout }
    }

    /// Assign an order id, serialize once, and call the three collaborators
    /// concurrently, each under its own timeout.
    ///
    /// All three outcomes are awaited before anything is reported. If any call
    /// fails the whole dispatch fails, with fraud, transaction and suggestion
    /// failures reported in that order of precedence. Calls that outlive their
    /// timeout keep running detached and their results are dropped.
    pub async fn dispatch(&self, order: ValidatedOrder) -> Result<DispatchOutcome, CheckoutError> {
        let order_id = Uuid::new_v4();
        let payload: Arc<str> = order.into_payload(order_id)?.into();

        info!(%order_id, "Dispatching order to collaborators");

        let fraud = {
            let detector = Arc::clone(&self.collaborators.fraud);
            let payload = Arc::clone(&payload);
            tokio::spawn(async move { detector.check_fraud(&payload).await })
        };

        let transaction = {
            let verifier = Arc::clone(&self.collaborators.transaction);
            let payload = Arc::clone(&payload);
            tokio::spawn(async move { verifier.verify_transaction(&payload).await })
        };

        let suggestions = {
            let provider = Arc::clone(&self.collaborators.suggestions);
            let payload = Arc::clone(&payload);
            tokio::spawn(async move { provider.get_suggestions(&payload).await })
        };

        let (fraud, transaction, suggestions) = tokio::join!(
            self.join(Collaborator::FraudDetection, fraud),
            self.join(Collaborator::TransactionVerification, transaction),
            self.join(Collaborator::Suggestions, suggestions),
        );

        let outcome = DispatchOutcome {
            order_id,
            fraud: fraud?,
            transaction: transaction?,
            suggestions: suggestions?,
        };

        info!(
            %order_id,
            is_fraud = outcome.fraud.is_fraud,
            is_valid = outcome.transaction.is_valid,
            suggestions = outcome.suggestions.len(),
            "All collaborators answered"
        );

        Ok(outcome)
    }

    /// Wait for one call. Dropping the handle on timeout detaches the task
    /// rather than aborting it.
    async fn join<T>(
        &self,
        collaborator: Collaborator,
        handle: JoinHandle<Result<T, CollaboratorError>>,
    ) -> Result<T, CollaboratorError> {
        let result = match tokio::time::timeout(self.timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(CollaboratorError::TaskFailed {
                collaborator,
                message: e.to_string(),
            }),
            Err(_) => Err(CollaboratorError::Timeout {
                collaborator,
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        };

        if let Err(e) = &result {
            warn!("Collaborator call failed: {}", e);
        }

        result
    }
}
