use bookstore_core::{FraudVerdict, Order};

use crate::INVALID_ORDER_PAYLOAD;

pub const NO_FRAUD: &str = "No fraud detected";
pub const MISSING_CONTACT: &str = "Missing contact information";
pub const SUSPICIOUS_CARD: &str = "Suspicious card number pattern";
pub const LARGE_ORDER: &str = "Unusually large order";

/// Orders above this total quantity are flagged.
pub const MAX_TOTAL_QUANTITY: u64 = 100;

/// Evaluate a serialized order. Undecodable payloads count as fraud.
pub fn check_payload(order_json: &str) -> FraudVerdict {
    match Order::from_json(order_json) {
        Ok(order) => evaluate(&order),
        Err(e) => {
            tracing::warn!("Fraud check received undecodable order: {}", e);
            FraudVerdict { is_fraud: true, reason: INVALID_ORDER_PAYLOAD.to_string() }
        }
    }
}

pub fn evaluate(order: &Order) -> FraudVerdict {
    let mut reasons = Vec::new();

    if order.user.contact.trim().is_empty() {
        reasons.push(MISSING_CONTACT);
    }

    let card_number = order.credit_card.number.expose().replace(' ', "");
    if card_number.ends_with("0000") || card_number.ends_with("9999") {
        reasons.push(SUSPICIOUS_CARD);
    }

    if order.total_quantity() > MAX_TOTAL_QUANTITY {
        reasons.push(LARGE_ORDER);
    }

    if reasons.is_empty() {
        FraudVerdict { is_fraud: false, reason: NO_FRAUD.to_string() }
    } else {
        FraudVerdict { is_fraud: true, reason: reasons.join("; ") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_json(contact: &str, card: &str, quantity: u64) -> String {
        serde_json::json!({
            "items": [{"name": "Refactoring", "quantity": quantity}],
            "user": {"name": "Alice", "contact": contact},
            "creditCard": {"number": card, "expirationDate": "12/27", "cvv": "123"},
        })
        .to_string()
    }

    #[test]
    fn test_clean_order_passes() {
        let verdict = check_payload(&order_json("alice@example.com", "4111111111111111", 5));
        assert!(!verdict.is_fraud);
        assert_eq!(verdict.reason, NO_FRAUD);
    }

    #[test]
    fn test_suspicious_card_suffixes() {
        let verdict = check_payload(&order_json("alice@example.com", "4111111111119999", 5));
        assert!(verdict.is_fraud);
        assert_eq!(verdict.reason, SUSPICIOUS_CARD);

        // Spaces are ignored before matching the suffix
        let verdict = check_payload(&order_json("alice@example.com", "4111 1111 1111 0000", 5));
        assert_eq!(verdict.reason, SUSPICIOUS_CARD);
    }

    #[test]
    fn test_large_order_threshold() {
        assert!(!check_payload(&order_json("a@b.c", "4111111111111111", 100)).is_fraud);

        let verdict = check_payload(&order_json("a@b.c", "4111111111111111", 101));
        assert!(verdict.is_fraud);
        assert_eq!(verdict.reason, LARGE_ORDER);
    }

    #[test]
    fn test_quantity_is_summed_across_items() {
        let payload = serde_json::json!({
            "items": [{"name": "A", "quantity": 60}, {"name": "B", "quantity": 41}, {"name": "C"}],
            "user": {"name": "Alice", "contact": "a@b.c"},
            "creditCard": {"number": "4111111111111111"},
        });
        assert_eq!(check_payload(&payload.to_string()).reason, LARGE_ORDER);
    }

    #[test]
    fn test_overflowing_total_is_still_large() {
        let payload = serde_json::json!({
            "items": [{"name": "A", "quantity": u64::MAX}, {"name": "B", "quantity": 2}],
            "user": {"name": "Alice", "contact": "a@b.c"},
            "creditCard": {"number": "4111111111111111"},
        });

        let verdict = check_payload(&payload.to_string());
        assert!(verdict.is_fraud);
        assert_eq!(verdict.reason, LARGE_ORDER);
    }

    #[test]
    fn test_quantity_beyond_u64_is_large() {
        let payload = r#"{
            "items": [{"name": "A", "quantity": 100000000000000000000}],
            "user": {"name": "Alice", "contact": "a@b.c"},
            "creditCard": {"number": "4111111111111111"}
        }"#;

        let verdict = check_payload(payload);
        assert!(verdict.is_fraud);
        assert_eq!(verdict.reason, LARGE_ORDER);
    }

    #[test]
    fn test_reasons_are_joined_in_order() {
        let verdict = check_payload(&order_json("   ", "4111111111110000", 500));
        assert!(verdict.is_fraud);
        assert_eq!(
            verdict.reason,
            "Missing contact information; Suspicious card number pattern; Unusually large order"
        );
    }

    #[test]
    fn test_undecodable_payload_is_fraud() {
        let verdict = check_payload("{\"items\": [");
        assert!(verdict.is_fraud);
        assert_eq!(verdict.reason, INVALID_ORDER_PAYLOAD);
    }
}
