//! Credential token type.

use std::fmt;

use crate::claims::{self, TokenClaims};
use crate::error::{InvalidInputError, TokenError};
use crate::Result;

/// Bearer token issued by `POST /auth/login`.
///
/// The token is opaque to the session: its signature and expiry are never
/// checked. Only [`claims`](Self::claims) looks inside, to read the identity
/// fields the API put in the payload.
///
/// # Security
///
/// Never logged or displayed in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialToken(String);

impl CredentialToken {
    /// Wrap a token string, rejecting empty or blank values.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidInputError::EmptyToken.into());
        }
        Ok(Self(token))
    }

    /// Returns the raw token for authorization headers and persistence.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the claims carried in the token's payload segment.
    pub fn claims(&self) -> std::result::Result<TokenClaims, TokenError> {
        claims::decode(&self.0)
    }
}

impl fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CredentialToken").field(&"[REDACTED]").finish()
    }
}
