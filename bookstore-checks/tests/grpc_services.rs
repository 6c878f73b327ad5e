use bookstore_checks::server::{
    FraudDetectionServer, FraudDetectionService, SuggestionsServer, SuggestionsService,
    TransactionVerificationServer, TransactionVerificationService,
};
use bookstore_core::{DecisionStatus, FraudDetector, SuggestionProvider, TransactionVerifier};
use bookstore_order::remote::{GrpcFraudDetector, GrpcSuggestionProvider, GrpcTransactionVerifier};
use bookstore_order::validation::validate_document;
use bookstore_order::{CheckoutError, CheckoutOrchestrator, Collaborators, DispatchCoordinator};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Endpoint, Server};

/// Serve all three collaborators on one ephemeral port.
async fn spawn_services() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(FraudDetectionServer::new(FraudDetectionService))
            .add_service(TransactionVerificationServer::new(TransactionVerificationService))
            .add_service(SuggestionsServer::new(SuggestionsService))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr
}

async fn channel(addr: SocketAddr) -> Channel {
    Endpoint::from_shared(format!("http://{}", addr))
        .unwrap()
        .connect()
        .await
        .unwrap()
}

fn order_json(card: &str) -> String {
    json!({
        "orderId": uuid::Uuid::new_v4().to_string(),
        "items": [{"name": "Clean Architecture", "quantity": 1}],
        "user": {"name": "Alice", "contact": "alice@example.com"},
        "creditCard": {"number": card, "expirationDate": "12/27", "cvv": "123"},
    })
    .to_string()
}

#[tokio::test]
async fn test_verdicts_over_grpc() {
    let channel = channel(spawn_services().await).await;

    let fraud = GrpcFraudDetector::new(channel.clone());
    let verdict = fraud.check_fraud(&order_json("4111111111119999")).await.unwrap();
    assert!(verdict.is_fraud);
    assert_eq!(verdict.reason, "Suspicious card number pattern");

    let transaction = GrpcTransactionVerifier::new(channel.clone());
    let verdict = transaction.verify_transaction(&order_json("4111111111111111")).await.unwrap();
    assert!(verdict.is_valid);
    assert_eq!(verdict.reason, "Transaction verified");

    let suggestions = GrpcSuggestionProvider::new(channel);
    let books = suggestions.get_suggestions(&order_json("4111111111111111")).await.unwrap();
    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["The Pragmatic Programmer", "Refactoring", "Distributed Systems 101"]);
}

#[tokio::test]
async fn test_malformed_payload_is_answered_not_failed() {
    let channel = channel(spawn_services().await).await;

    let verdict = GrpcFraudDetector::new(channel.clone()).check_fraud("{broken").await.unwrap();
    assert!(verdict.is_fraud);
    assert_eq!(verdict.reason, "Invalid order payload.");

    let verdict = GrpcTransactionVerifier::new(channel.clone())
        .verify_transaction("{broken")
        .await
        .unwrap();
    assert!(!verdict.is_valid);

    let books = GrpcSuggestionProvider::new(channel).get_suggestions("{broken").await.unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].book_id, "101");
}

#[tokio::test]
async fn test_checkout_through_grpc_collaborators() {
    let channel = channel(spawn_services().await).await;
    let collaborators = Collaborators {
        fraud: Arc::new(GrpcFraudDetector::new(channel.clone())),
        transaction: Arc::new(GrpcTransactionVerifier::new(channel.clone())),
        suggestions: Arc::new(GrpcSuggestionProvider::new(channel)),
    };
    let orchestrator =
        CheckoutOrchestrator::new(DispatchCoordinator::new(collaborators, Duration::from_secs(3)));

    let order = validate_document(json!({
        "items": [{"name": "Refactoring", "quantity": 2}],
        "user": {"name": "Alice", "contact": "alice@example.com"},
        "creditCard": {"number": "4111 1111 1111 1111", "expirationDate": "01/29", "cvv": "999"},
    }))
    .unwrap();

    let decision = orchestrator.checkout(order).await.unwrap();
    assert_eq!(decision.status, DecisionStatus::Approved);
    let titles: Vec<_> = decision.suggested_books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["The Pragmatic Programmer", "Distributed Systems 101", "Clean Architecture"]);
}

#[tokio::test]
async fn test_checkout_fails_when_a_service_is_down() {
    let live = channel(spawn_services().await).await;

    // Bind and drop a listener to get a port nothing listens on.
    let dead_addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let dead = Endpoint::from_shared(format!("http://{}", dead_addr)).unwrap().connect_lazy();

    let collaborators = Collaborators {
        fraud: Arc::new(GrpcFraudDetector::new(live.clone())),
        transaction: Arc::new(GrpcTransactionVerifier::new(live)),
        suggestions: Arc::new(GrpcSuggestionProvider::new(dead)),
    };
    let orchestrator =
        CheckoutOrchestrator::new(DispatchCoordinator::new(collaborators, Duration::from_secs(3)));

    let order = validate_document(json!({
        "items": [{"name": "Refactoring", "quantity": 1}],
        "user": {"name": "Alice", "contact": "alice@example.com"},
        "creditCard": {"number": "4111111111111111", "expirationDate": "12/27", "cvv": "123"},
    }))
    .unwrap();

    match orchestrator.checkout(order).await {
        Err(CheckoutError::Collaborator(e)) => assert_eq!(e.rpc_code(), Some("UNAVAILABLE")),
        other => panic!("expected collaborator failure, got {other:?}"),
    }
}
