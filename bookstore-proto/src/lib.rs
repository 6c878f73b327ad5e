//! Wire types for the three collaborator services.
//!
//! Field tags follow the `.proto` contracts the collaborators were first
//! deployed with, so these messages interoperate with any protobuf client.

use bookstore_core::{Book as CoreBook, FraudVerdict, TransactionVerdict};

pub mod fraud_detection {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FraudCheckRequest {
        #[prost(string, tag = "1")]
        pub order_json: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FraudCheckResponse {
        #[prost(bool, tag = "1")]
        pub is_fraud: bool,
        #[prost(string, tag = "2")]
        pub reason: ::prost::alloc::string::String,
    }

    include!(concat!(env!("OUT_DIR"), "/fraud_detection.FraudDetection.rs"));
}

pub mod transaction_verification {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TransactionVerificationRequest {
        #[prost(string, tag = "1")]
        pub order_json: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TransactionVerificationResponse {
        #[prost(bool, tag = "1")]
        pub is_valid: bool,
        #[prost(string, tag = "2")]
        pub reason: ::prost::alloc::string::String,
    }

    include!(concat!(env!("OUT_DIR"), "/transaction_verification.TransactionVerification.rs"));
}

pub mod suggestions {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SuggestionsRequest {
        #[prost(string, tag = "1")]
        pub order_json: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Book {
        #[prost(string, tag = "1")]
        pub book_id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub title: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub author: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SuggestionsResponse {
        #[prost(message, repeated, tag = "1")]
        pub books: ::prost::alloc::vec::Vec<Book>,
    }

    include!(concat!(env!("OUT_DIR"), "/suggestions.Suggestions.rs"));
}

impl From<FraudVerdict> for fraud_detection::FraudCheckResponse {
    fn from(verdict: FraudVerdict) -> Self {
        Self { is_fraud: verdict.is_fraud, reason: verdict.reason }
    }
}

impl From<fraud_detection::FraudCheckResponse> for FraudVerdict {
    fn from(response: fraud_detection::FraudCheckResponse) -> Self {
        Self { is_fraud: response.is_fraud, reason: response.reason }
    }
}

impl From<TransactionVerdict> for transaction_verification::TransactionVerificationResponse {
    fn from(verdict: TransactionVerdict) -> Self {
        Self { is_valid: verdict.is_valid, reason: verdict.reason }
    }
}

impl From<transaction_verification::TransactionVerificationResponse> for TransactionVerdict {
    fn from(response: transaction_verification::TransactionVerificationResponse) -> Self {
        Self { is_valid: response.is_valid, reason: response.reason }
    }
}

impl From<CoreBook> for suggestions::Book {
    fn from(book: CoreBook) -> Self {
        Self { book_id: book.book_id, title: book.title, author: book.author }
    }
}

impl From<suggestions::Book> for CoreBook {
    fn from(book: suggestions::Book) -> Self {
        Self { book_id: book.book_id, title: book.title, author: book.author }
    }
}

impl From<Vec<CoreBook>> for suggestions::SuggestionsResponse {
    fn from(books: Vec<CoreBook>) -> Self {
        Self { books: books.into_iter().map(Into::into).collect() }
    }
}

impl From<suggestions::SuggestionsResponse> for Vec<CoreBook> {
    fn from(response: suggestions::SuggestionsResponse) -> Self {
        response.books.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_fraud_response_encodes_on_the_wire() {
        let response: fraud_detection::FraudCheckResponse = FraudVerdict {
            is_fraud: true,
            reason: "Unusually large order".to_string(),
        }
        .into();

        let decoded =
            fraud_detection::FraudCheckResponse::decode(response.encode_to_vec().as_slice()).unwrap();
        assert!(decoded.is_fraud);
        assert_eq!(FraudVerdict::from(decoded).reason, "Unusually large order");
    }

    #[test]
    fn test_suggestions_response_keeps_order() {
        let books = vec![
            CoreBook { book_id: "105".into(), title: "The Pragmatic Programmer".into(), author: "A. Hunt".into() },
            CoreBook { book_id: "106".into(), title: "Refactoring".into(), author: "M. Fowler".into() },
        ];

        let response = suggestions::SuggestionsResponse::from(books.clone());
        assert_eq!(Vec::<CoreBook>::from(response), books);
    }
}
