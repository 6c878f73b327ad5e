use bookstore_core::{Order, TransactionVerdict};

use crate::INVALID_ORDER_PAYLOAD;

pub const VERIFIED: &str = "Transaction verified";
pub const NO_ITEMS: &str = "No items provided";
pub const MISSING_NAME: &str = "Missing user name";
pub const MISSING_CONTACT: &str = "Missing user contact";
pub const INVALID_CARD_NUMBER: &str = "Invalid credit card number";
pub const INVALID_EXPIRATION: &str = "Invalid expiration date";
pub const INVALID_CVV: &str = "Invalid CVV";

/// Evaluate a serialized order. Undecodable payloads are invalid.
pub fn check_payload(order_json: &str) -> TransactionVerdict {
    match Order::from_json(order_json) {
        Ok(order) => evaluate(&order),
        Err(e) => {
            tracing::warn!("Transaction verification received undecodable order: {}", e);
            TransactionVerdict { is_valid: false, reason: INVALID_ORDER_PAYLOAD.to_string() }
        }
    }
}

pub fn evaluate(order: &Order) -> TransactionVerdict {
    let mut errors = Vec::new();

    if order.items.is_empty() {
        errors.push(NO_ITEMS);
    }
    if order.user.name.is_empty() {
        errors.push(MISSING_NAME);
    }
    if order.user.contact.is_empty() {
        errors.push(MISSING_CONTACT);
    }

    let card = &order.credit_card;
    if !is_card_number(&card.number.expose().replace(' ', "")) {
        errors.push(INVALID_CARD_NUMBER);
    }
    if !is_expiration_date(card.expiration_date.expose().trim()) {
        errors.push(INVALID_EXPIRATION);
    }
    if !is_cvv(card.cvv.expose().trim()) {
        errors.push(INVALID_CVV);
    }

    if errors.is_empty() {
        TransactionVerdict { is_valid: true, reason: VERIFIED.to_string() }
    } else {
        TransactionVerdict { is_valid: false, reason: errors.join("; ") }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_card_number(number: &str) -> bool {
    all_digits(number) && (13..=19).contains(&number.len())
}

fn is_cvv(cvv: &str) -> bool {
    all_digits(cvv) && matches!(cvv.len(), 3 | 4)
}

/// `MM/YY` with a month between 01 and 12.
fn is_expiration_date(date: &str) -> bool {
    match date.as_bytes() {
        [m1, m2, b'/', y1, y2] => {
            let month_ok = match m1 {
                b'0' => matches!(m2, b'1'..=b'9'),
                b'1' => matches!(m2, b'0'..=b'2'),
                _ => false,
            };
            month_ok && y1.is_ascii_digit() && y2.is_ascii_digit()
        }
        _ => false,
    }
}
