use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::verdict::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    #[serde(rename = "Order Approved")]
    Approved,
    #[serde(rename = "Order Rejected")]
    Rejected,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Approved => "Order Approved",
            DecisionStatus::Rejected => "Order Rejected",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one checkout. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub order_id: Uuid,
    pub status: DecisionStatus,
    /// Empty unless `status` is `Approved`.
    pub suggested_books: Vec<Book>,
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        self.status == DecisionStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decision_wire_shape() {
        let order_id = Uuid::new_v4();
        let decision = Decision {
            order_id,
            status: DecisionStatus::Approved,
            suggested_books: vec![Book {
                book_id: "106".to_string(),
                title: "Refactoring".to_string(),
                author: "M. Fowler".to_string(),
            }],
        };

        assert_eq!(
            serde_json::to_value(&decision).unwrap(),
            json!({
                "orderId": order_id.to_string(),
                "status": "Order Approved",
                "suggestedBooks": [{"bookId": "106", "title": "Refactoring", "author": "M. Fowler"}],
            })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DecisionStatus::Rejected.to_string(), "Order Rejected");
    }
}
