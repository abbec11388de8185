//! Error types for blogadmin.
//!
//! A single error type with explicit variants for transport, authentication,
//! protocol, token, storage and input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for blogadmin operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials, missing session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Protocol errors (non-2xx responses, unexpected bodies).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The credential token payload could not be decoded.
    #[error("malformed token: {0}")]
    Token(#[from] TokenError),

    /// Durable storage failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (invalid URL, empty identity field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Message suitable for showing on a login screen.
    ///
    /// Rejections surface the server's own message when it sent one;
    /// everything else collapses into a generic failure.
    pub fn user_message(&self) -> String {
        match self {
            Error::Auth(AuthError::Rejected { message }) => message
                .clone()
                .unwrap_or_else(|| "Invalid username or password.".to_string()),
            _ => "There was a problem signing in.".to_string(),
        }
    }

    /// Returns true if the API turned the credentials down.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Auth(AuthError::Rejected { .. }))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The API refused the credentials.
    #[error("login rejected{}", rejected_suffix(.message))]
    Rejected { message: Option<String> },

    /// No session is active.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The session changed while a request was in flight.
    #[error("session changed during request")]
    SessionChanged,
}

fn rejected_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Protocol-level errors from API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Returns true for 4xx statuses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

/// Failures decoding the claims carried by a credential token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token has no second segment.
    #[error("token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid base64.
    #[error("payload is not base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The payload is not the expected JSON claims object.
    #[error("payload is not a claims object: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Durable storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a key failed.
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// Writing a key failed.
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// Removing a key failed.
    #[error("failed to remove '{key}': {message}")]
    Remove { key: String, message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid identity field.
    #[error("invalid identity: {reason}")]
    Identity { reason: String },

    /// Empty credential token.
    #[error("credential token must not be empty")]
    EmptyToken,

    /// Invalid storage key.
    #[error("invalid storage key '{key}'")]
    StorageKey { key: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
