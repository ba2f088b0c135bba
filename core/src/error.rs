//! Error types for the todo API client and panel.
//!
//! # Design
//! Every failure the panel can observe is one `ApiError`. The panel turns it
//! into the single error string it displays, so `Display` matters: for
//! `Transport`, `Validation` and `Rejected` it is the bare message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required form field was empty. Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The host could not complete the round-trip (connection refused, reset...).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The server reported a failed delete (strict delete check only).
    #[error("{message}")]
    Rejected { message: String },
}
