use crate::collaborator::Collaborator;

/// Why a collaborator call produced no verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} did not answer within {timeout_ms} ms")]
    Timeout {
        collaborator: Collaborator,
        timeout_ms: u64,
    },
    /// Transport or remote failure, `code` is the canonical gRPC code name.
    #[error("{collaborator} call failed with {code}: {message}")]
    Rpc {
        collaborator: Collaborator,
        code: String,
        message: String,
    },
    /// The task running the call panicked or was cancelled.
    #[error("{collaborator} task failed: {message}")]
    TaskFailed {
        collaborator: Collaborator,
        message: String,
    },
}

impl CollaboratorError {
    pub fn collaborator(&self) -> Collaborator {
        match self {
            CollaboratorError::Timeout { collaborator, .. }
            | CollaboratorError::Rpc { collaborator, .. }
            | CollaboratorError::TaskFailed { collaborator, .. } => *collaborator,
        }
    }

    /// gRPC code name for remote-call failures, `None` for local ones.
    pub fn rpc_code(&self) -> Option<&str> {
        match self {
            CollaboratorError::Timeout { .. } => Some("DEADLINE_EXCEEDED"),
            CollaboratorError::Rpc { code, .. } => Some(code),
            CollaboratorError::TaskFailed { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderDecodeError {
    #[error("order payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("order payload is not a JSON object")]
    NotAnObject,
}
