use bookstore_shared::pii::Masked;
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::OrderDecodeError;

/// A read-only view of a serialized order document.
///
/// Collaborators receive whatever the storefront sent plus the `orderId`
/// assigned by the orchestrator, so decoding is lenient: missing or
/// mistyped fields fall back to empty values instead of failing.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub items: Vec<Item>,
    pub user: User,
    pub credit_card: CreditCard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Missing or non-positive quantities read as 0. Fractions are truncated
    /// and anything past `u64::MAX` saturates.
    pub quantity: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreditCard {
    pub number: Masked<String>,
    pub expiration_date: Masked<String>,
    pub cvv: Masked<String>,
}

impl Order {
    /// Decode an order payload. An empty payload is the empty order.
    pub fn from_json(order_json: &str) -> Result<Self, OrderDecodeError> {
        if order_json.is_empty() {
            return Ok(Self::default());
        }

        let document: Value = serde_json::from_str(order_json)?;
        match document {
            Value::Object(map) => Ok(Self::from_document(&map)),
            _ => Err(OrderDecodeError::NotAnObject),
        }
    }

    pub fn from_document(document: &Map<String, Value>) -> Self {
        let items = document
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Item::from_value).collect())
            .unwrap_or_default();

        let user = object(document, "user");
        let card = object(document, "creditCard");

        Self {
            items,
            user: User {
                name: text(user, "name"),
                contact: text(user, "contact"),
            },
            credit_card: CreditCard {
                number: Masked(text(card, "number")),
                expiration_date: Masked(text(card, "expirationDate")),
                cvv: Masked(text(card, "cvv")),
            },
        }
    }

    /// Saturates instead of wrapping, so huge quantities still read as huge.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| item.quantity).fold(0, u64::saturating_add)
    }

    /// Lower-cased item names, for case-insensitive title matching.
    pub fn ordered_titles(&self) -> HashSet<String> {
        self.items.iter().map(|item| item.name.to_lowercase()).collect()
    }
}

impl Item {
    fn from_value(value: &Value) -> Self {
        let fields = value.as_object();
        Self {
            name: text(fields, "name"),
            quantity: fields
                .and_then(|f| f.get("quantity"))
                .map_or(0, quantity),
        }
    }
}

fn quantity(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|n| *n > 0.0).map(|n| n as u64))
        .unwrap_or(0)
}

fn object<'a>(document: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    document.get(key).and_then(Value::as_object)
}

/// Scalars render as text, anything else reads as empty.
fn text(fields: Option<&Map<String, Value>>, key: &str) -> String {
    match fields.and_then(|f| f.get(key)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
