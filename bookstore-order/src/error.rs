use bookstore_core::CollaboratorError;

/// Failures after validation. Each one is terminal for the request.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
    #[error("failed to serialize order: {0}")]
    Serialization(#[from] serde_json::Error),
}
