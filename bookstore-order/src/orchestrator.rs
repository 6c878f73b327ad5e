use bookstore_core::Decision;
use tracing::info;

use crate::decision::decide;
use crate::dispatch::DispatchCoordinator;
use crate::error::CheckoutError;
use crate::validation::ValidatedOrder;

/// Runs a validated order through dispatch and aggregation.
pub struct CheckoutOrchestrator {
    coordinator: DispatchCoordinator,
}

impl CheckoutOrchestrator {
    pub fn new(coordinator: DispatchCoordinator) -> Self {
        Self { coordinator }
    }

    pub async fn checkout(&self, order: ValidatedOrder) -> Result<Decision, CheckoutError> {
        let outcome = self.coordinator.dispatch(order).await?;
        let decision = decide(outcome);

        info!(
            order_id = %decision.order_id,
            approved = decision.is_approved(),
            suggested = decision.suggested_books.len(),
            "Decision computed"
        );

        Ok(decision)
    }
}
