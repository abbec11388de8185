//! JSON HTTP client for the blog REST API.

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use blogadmin_core::error::{Error, ProtocolError, TransportError};
use blogadmin_core::ApiUrl;

use crate::endpoints::ErrorResponse;

/// A decoded 2xx response.
#[derive(Debug)]
pub(crate) struct Reply<R> {
    pub status: u16,
    pub body: R,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

pub(crate) fn transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

impl HttpClient {
    /// Create a client with the default `reqwest` configuration.
    pub fn new(api: ApiUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("blogadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;

        Ok(Self { client, api })
    }

    /// Authenticated GET.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get_authed<R>(&self, path: &str, token: &str) -> Result<Reply<R>, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Unauthenticated POST with a JSON body.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<Reply<R>, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Decode a 2xx body, or turn anything else into a [`ProtocolError`].
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Reply<R>, Error> {
        let status = response.status();
        trace!(%status, "response");

        let bytes = response.bytes().await.map_err(transport)?;

        if status.is_success() {
            let body = serde_json::from_slice(&bytes).map_err(|e| {
                ProtocolError::new(status.as_u16(), Some(format!("unexpected response body: {e}")))
            })?;
            Ok(Reply {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(Error::Protocol(parse_error(status, &bytes)))
        }
    }
}

fn parse_error(status: StatusCode, bytes: &[u8]) -> ProtocolError {
    let message = serde_json::from_slice::<ErrorResponse>(bytes)
        .ok()
        .and_then(ErrorResponse::into_message);
    ProtocolError::new(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://api.example.com").unwrap();
        let client = HttpClient::new(api).unwrap();
        assert_eq!(client.api.endpoint(crate::endpoints::ME), "https://api.example.com/auth/me");
    }

    #[test]
    fn parse_error_reads_server_message() {
        let err = parse_error(
            StatusCode::UNAUTHORIZED,
            br#"{"success":false,"message":"Credenciales incorrectas"}"#,
        );
        assert_eq!(err.status, 401);
        assert_eq!(err.message.as_deref(), Some("Credenciales incorrectas"));
    }

    #[test]
    fn parse_error_tolerates_non_json() {
        let err = parse_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.status, 502);
        assert_eq!(err.message, None);
    }
}
