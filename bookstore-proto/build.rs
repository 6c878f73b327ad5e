use tonic_build::manual::{Builder, Method, Service};

// Messages are declared with prost derives in src/lib.rs, so only the
// service stubs are generated and no protoc is needed.
fn main() {
    let fraud_detection = Service::builder()
        .name("FraudDetection")
        .package("fraud_detection")
        .method(unary(
            "check_fraud",
            "CheckFraud",
            "crate::fraud_detection::FraudCheckRequest",
            "crate::fraud_detection::FraudCheckResponse",
        ))
        .build();

    let transaction_verification = Service::builder()
        .name("TransactionVerification")
        .package("transaction_verification")
        .method(unary(
            "verify_transaction",
            "VerifyTransaction",
            "crate::transaction_verification::TransactionVerificationRequest",
            "crate::transaction_verification::TransactionVerificationResponse",
        ))
        .build();

    let suggestions = Service::builder()
        .name("Suggestions")
        .package("suggestions")
        .method(unary(
            "get_suggestions",
            "GetSuggestions",
            "crate::suggestions::SuggestionsRequest",
            "crate::suggestions::SuggestionsResponse",
        ))
        .build();

    Builder::new().compile(&[fraud_detection, transaction_verification, suggestions]);
}

fn unary(name: &str, route_name: &str, input_type: &str, output_type: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(input_type)
        .output_type(output_type)
        .codec_path("tonic::codec::ProstCodec")
        .build()
}
