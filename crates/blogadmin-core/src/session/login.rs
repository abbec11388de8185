//! Login flow: credentials in, session out.

use tracing::{info, instrument, warn};

use crate::error::{AuthError, Error};
use crate::session::DASHBOARD_PATH;
use crate::session::SessionStore;
use crate::traits::{AuthApi, Storage};
use crate::types::Identity;
use crate::{Credentials, Result};

/// A successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignIn {
    /// Who is now logged in.
    pub identity: Identity,
    /// Where the login screen navigates next.
    pub redirect_to: &'static str,
}

impl<S: Storage, A: AuthApi> SessionStore<S, A> {
    /// Exchange credentials for a session.
    ///
    /// Calls `POST /auth/login`, reads the identity from the returned token's
    /// claims and hands both to [`login`](Self::login). Every user lands on
    /// the dashboard, whatever their role. On failure the session is left
    /// exactly as it was; [`Error::user_message`] gives the text to show.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignIn> {
        let token = self.api().login(credentials).await.map_err(|e| {
            let e = as_rejection(e);
            warn!(error = %e, "Login request failed");
            e
        })?;

        let identity = token
            .claims()
            .map_err(Error::from)
            .and_then(|claims| claims.identity())
            .inspect_err(|e| warn!(error = %e, "Login token carries no usable identity"))?;

        self.login(identity.clone(), token)?;
        info!("Signed in");

        Ok(SignIn {
            identity,
            redirect_to: DASHBOARD_PATH,
        })
    }
}

/// Client errors from the login endpoint mean the credentials were refused.
fn as_rejection(err: Error) -> Error {
    match err {
        Error::Protocol(p) if p.is_client_error() => AuthError::Rejected { message: p.message }.into(),
        other => other,
    }
}
