use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookstore_order::{CheckoutError, ValidationError};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Rejected input, shown to the client verbatim.
    ValidationError(String),
    /// A collaborator could not be reached or answered with an error status.
    RemoteCallError(String),
    InternalServerError(String),
    /// The body could not be read, e.g. it exceeds the size limit.
    BodyRejected(StatusCode, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => {
                tracing::warn!("Request validation failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::RemoteCallError(code) => {
                tracing::error!("Collaborator call failed: {}", code);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("gRPC error: {}", code))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Unexpected error: {}", msg))
            }
            AppError::BodyRejected(status, msg) => {
                tracing::warn!("Request body rejected: {}", msg);
                (status, msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": status.as_u16().to_string(),
                "message": error_message,
            },
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        Self::BodyRejected(rejection.status(), rejection.body_text())
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Collaborator(e) => match e.rpc_code() {
                Some(code) => Self::RemoteCallError(code.to_string()),
                None => Self::InternalServerError(e.to_string()),
            },
            CheckoutError::Serialization(e) => Self::InternalServerError(e.to_string()),
        }
    }
}
