//! The three collaborator predicates, their in-process adapters and their
//! gRPC servers.

pub mod catalog;
pub mod fraud;
pub mod local;
pub mod server;
pub mod suggestions;
pub mod transaction;

pub use local::{LocalFraudDetector, LocalSuggestionProvider, LocalTransactionVerifier};

/// Shared reason for payloads that do not decode into an order.
pub const INVALID_ORDER_PAYLOAD: &str = "Invalid order payload.";
