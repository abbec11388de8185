//! Auth endpoint paths and request/response types.

use serde::Deserialize;

use blogadmin_core::Identity;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST, body `{username, password}`.
pub const LOGIN: &str = "/auth/login";

/// GET, bearer-authenticated.
pub const ME: &str = "/auth/me";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response from `/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<LoginData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub access_token: String,
}

/// Response from `/auth/me`.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: Identity,
}

/// Error body of a non-2xx response.
///
/// Covers both `{success: false, message}` and the framework's default
/// `{statusCode, message, error}` where `message` may be a list.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorResponse {
    /// The most specific human-readable message in the body.
    pub fn into_message(self) -> Option<String> {
        match self.message {
            Some(ErrorMessage::One(message)) => Some(message),
            Some(ErrorMessage::Many(messages)) if !messages.is_empty() => Some(messages.join("; ")),
            _ => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_field() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"success":false,"message":"Credenciales incorrectas"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Credenciales incorrectas"));
    }

    #[test]
    fn error_message_joins_validation_list() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"statusCode":400,"message":["username should not be empty","password too short"],"error":"Bad Request"}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("username should not be empty; password too short")
        );
    }

    #[test]
    fn error_message_falls_back_to_error_field() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"Error en el servidor"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Error en el servidor"));
    }

    #[test]
    fn login_response_without_data() {
        let body: LoginResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(body.success);
        assert!(body.data.is_none());
    }
}
