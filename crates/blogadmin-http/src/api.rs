//! HTTP-backed auth API.

use async_trait::async_trait;
use tracing::{debug, instrument};

use blogadmin_core::error::{AuthError, Error, ProtocolError};
use blogadmin_core::traits::AuthApi;
use blogadmin_core::{ApiUrl, CredentialToken, Credentials, Identity, Result};

use crate::client::HttpClient;
use crate::endpoints::*;

/// [`AuthApi`] talking to the blog REST API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: HttpClient,
}

impl HttpAuthApi {
    /// Create an API client for the given base URL.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(api)?,
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> Result<CredentialToken> {
        debug!("Requesting token");

        let reply = match self.client.post::<_, LoginResponse>(LOGIN, credentials).await {
            Ok(reply) => reply,
            Err(Error::Protocol(p)) if p.is_client_error() => {
                return Err(AuthError::Rejected { message: p.message }.into());
            }
            Err(e) => return Err(e),
        };
        let response = reply.body;

        if !response.success {
            return Err(AuthError::Rejected {
                message: response.message,
            }
            .into());
        }

        let data = response.data.ok_or_else(|| {
            ProtocolError::new(reply.status, Some("login response has no access_token".to_string()))
        })?;

        CredentialToken::new(data.access_token)
    }

    #[instrument(skip(self, token))]
    async fn me(&self, token: &CredentialToken) -> Result<Identity> {
        debug!("Fetching identity");

        let reply = self
            .client
            .get_authed::<MeResponse>(ME, token.as_str())
            .await?;

        Ok(reply.body.user)
    }
}
