pub mod collaborator;
pub mod decision;
pub mod error;
pub mod order;
pub mod verdict;

pub use collaborator::{Collaborator, FraudDetector, SuggestionProvider, TransactionVerifier};
pub use decision::{Decision, DecisionStatus};
pub use error::{CollaboratorError, OrderDecodeError};
pub use order::{CreditCard, Item, Order, User};
pub use verdict::{Book, FraudVerdict, TransactionVerdict};
