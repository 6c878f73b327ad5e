pub mod decision;
pub mod dispatch;
pub mod error;
pub mod orchestrator;
pub mod remote;
pub mod validation;

pub use decision::decide;
pub use dispatch::{Collaborators, DispatchCoordinator, DispatchOutcome};
pub use error::CheckoutError;
pub use orchestrator::CheckoutOrchestrator;
pub use validation::{validate_request, ValidatedOrder, ValidationError};
