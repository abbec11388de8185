//! Auth API trait.

use async_trait::async_trait;

use crate::types::Identity;
use crate::{CredentialToken, Credentials, Result};

/// The authentication endpoints of the blog REST API.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`: exchange credentials for a token.
    ///
    /// Implementations return [`AuthError::Rejected`](crate::error::AuthError::Rejected)
    /// when the API turns the credentials down.
    async fn login(&self, credentials: &Credentials) -> Result<CredentialToken>;

    /// `GET /auth/me`: the identity the token belongs to.
    async fn me(&self, token: &CredentialToken) -> Result<Identity>;
}
