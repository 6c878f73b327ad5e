use std::sync::Arc;
use std::time::Duration;
use bookstore_checks::{LocalFraudDetector, LocalSuggestionProvider, LocalTransactionVerifier};
use bookstore_order::{remote, CheckoutOrchestrator, Collaborators, DispatchCoordinator};
use bookstore_shared::app_config::{CollaboratorConfig, CollaboratorMode};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<CheckoutOrchestrator>,
}

impl AppState {
    pub fn new(collaborators: Collaborators, timeout: Duration) -> Self {
        let coordinator = DispatchCoordinator::new(collaborators, timeout);
        Self {
            orchestrator: Arc::new(CheckoutOrchestrator::new(coordinator)),
        }
    }

    /// Wire collaborators according to `collaborators.mode`.
    pub fn from_config(config: &CollaboratorConfig) -> Result<Self, tonic::transport::Error> {
        let collaborators = match config.mode {
            CollaboratorMode::Grpc => remote::connect(config)?,
            CollaboratorMode::Local => local_collaborators(),
        };
        Ok(Self::new(collaborators, config.timeout()))
    }
}

pub fn local_collaborators() -> Collaborators {
    Collaborators {
        fraud: Arc::new(LocalFraudDetector),
        transaction: Arc::new(LocalTransactionVerifier),
        suggestions: Arc::new(LocalSuggestionProvider),
    }
}
