use serde_json::{Map, Value};
use uuid::Uuid;

/// Rejections for an incoming checkout body. The messages are shown to the
/// client as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body must be valid JSON.")]
    MalformedJson,
    #[error("Invalid JSON payload.")]
    NotAnObject,
    #[error("Items list is required.")]
    MissingItems,
    #[error("User name and contact are required.")]
    MissingUser,
    #[error("Credit card details are required.")]
    MissingCreditCard,
}

/// A checkout document that passed validation, without an `orderId` yet.
///
/// Fields the validator does not know about are kept untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder(Map<String, Value>);

impl ValidatedOrder {
    /// Attach the order id and serialize. Consumes the order so it cannot be
    /// changed after dispatch.
    pub fn into_payload(mut self, order_id: Uuid) -> Result<String, serde_json::Error> {
        self.0.insert("orderId".to_string(), Value::String(order_id.to_string()));
        serde_json::to_string(&self.0)
    }
}

/// Validate a raw request body. Rules run in order and the first failure wins.
pub fn validate_request(body: &[u8]) -> Result<ValidatedOrder, ValidationError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ValidationError::MalformedJson)?;
    validate_document(value)
}

pub fn validate_document(value: Value) -> Result<ValidatedOrder, ValidationError> {
    let Value::Object(document) = value else {
        return Err(ValidationError::NotAnObject);
    };

    let has_items = document
        .get("items")
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty());
    if !has_items {
        return Err(ValidationError::MissingItems);
    }

    if !has_fields(&document, "user", &["name", "contact"]) {
        return Err(ValidationError::MissingUser);
    }

    if !has_fields(&document, "creditCard", &["number", "expirationDate", "cvv"]) {
        return Err(ValidationError::MissingCreditCard);
    }

    Ok(ValidatedOrder(document))
}

/// True when `document[section]` is an object whose `fields` are all truthy.
fn has_fields(document: &Map<String, Value>, section: &str, fields: &[&str]) -> bool {
    match document.get(section) {
        Some(Value::Object(section)) => fields.iter().all(|f| is_truthy(section.get(*f))),
        _ => false,
    }
}

/// Missing, null, false, zero and empty values are all "not provided".
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
