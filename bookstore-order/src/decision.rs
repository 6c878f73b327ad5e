use bookstore_core::{Decision, DecisionStatus};

use crate::dispatch::DispatchOutcome;

/// Approve iff no fraud and the transaction is valid. Suggestions only
/// survive on approval.
pub fn decide(outcome: DispatchOutcome) -> Decision {
    let approved = !outcome.fraud.is_fraud && outcome.transaction.is_valid;

    let (status, suggested_books) = if approved {
        (DecisionStatus::Approved, outcome.suggestions)
    } else {
        (DecisionStatus::Rejected, Vec::new())
    };

    Decision { order_id: outcome.order_id, status, suggested_books }
}
