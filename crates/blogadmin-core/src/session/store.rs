//! Session store.

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::error::{AuthError, Error, InvalidInputError};
use crate::traits::{AuthApi, Storage};
use crate::types::{Identity, Session};
use crate::{CredentialToken, Result};

/// Storage key holding the JSON-serialized [`Identity`].
pub const USER_KEY: &str = "user";

/// Storage key holding the raw credential token.
pub const TOKEN_KEY: &str = "token";

/// Holds the current [`Session`] and keeps durable storage in step with it.
///
/// The store is an ordinary value: build one per application (or per test)
/// and hand out references. Consumers that need to react to logins and
/// logouts call [`subscribe`](Self::subscribe).
///
/// # Example
///
/// ```no_run
/// # use blogadmin_core::{Credentials, SessionStore};
/// # use blogadmin_core::memory::MemoryStorage;
/// # async fn example(api: impl blogadmin_core::traits::AuthApi) -> blogadmin_core::Result<()> {
/// let store = SessionStore::open(MemoryStorage::new(), api);
/// let signed_in = store.sign_in(&Credentials::new("testuser", "password123")).await?;
/// assert_eq!(store.current_session().identity(), Some(&signed_in.identity));
/// # Ok(())
/// # }
/// ```
pub struct SessionStore<S, A> {
    storage: S,
    api: A,
    state: watch::Sender<Session>,
}

impl<S: Storage, A: AuthApi> SessionStore<S, A> {
    /// Create a store with an empty session. Storage is not read.
    pub fn new(storage: S, api: A) -> Self {
        let (state, _) = watch::channel(Session::empty());
        Self {
            storage,
            api,
            state,
        }
    }

    /// Create a store and restore any persisted session.
    pub fn open(storage: S, api: A) -> Self {
        let store = Self::new(storage, api);
        store.initialize();
        store
    }

    /// Restore the session from durable storage.
    ///
    /// A missing pair leaves storage alone. A half-present, unreadable or
    /// unparsable pair is wiped and the session stays empty.
    #[instrument(skip(self))]
    pub fn initialize(&self) {
        let user = self.storage.get(USER_KEY);
        let token = self.storage.get(TOKEN_KEY);

        match (user, token) {
            (Ok(None), Ok(None)) => {
                debug!("No persisted session");
                self.publish(Session::empty());
            }
            (Ok(Some(user)), Ok(Some(token))) => match restore(&user, token) {
                Ok(session) => {
                    if let Some(identity) = session.identity() {
                        info!(username = %identity.username(), "Restored session");
                    }
                    self.publish(session);
                }
                Err(e) => {
                    warn!(error = %e, "Discarding corrupt persisted session");
                    self.discard();
                }
            },
            (user, token) => {
                warn!(
                    user = ?user.map(|u| u.is_some()),
                    token = ?token.map(|t| t.is_some()),
                    "Discarding incomplete persisted session"
                );
                self.discard();
            }
        }
    }

    /// Start a session for `identity`, persisting both halves.
    ///
    /// The token is trusted as-is. If storage cannot take the pair, the
    /// store logs out and returns the storage error.
    #[instrument(skip(self, identity, token), fields(username = %identity.username()))]
    pub fn login(&self, identity: Identity, token: CredentialToken) -> Result<()> {
        if let Err(e) = self.persist(&identity, &token) {
            warn!(error = %e, "Failed to persist session");
            self.logout();
            return Err(e);
        }

        self.publish(Session::authenticated(identity, token));
        info!("Session started");
        Ok(())
    }

    /// End the session. Calling this with no session is a no-op.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        self.clear_storage();
        if self.publish(Session::empty()) {
            info!("Session ended");
        }
    }

    /// Re-read the identity from `GET /auth/me`.
    ///
    /// On success the new identity replaces the old one in memory and in
    /// storage. On any failure the session is discarded via
    /// [`logout`](Self::logout) and the cause is returned. If the session was
    /// replaced while the request was in flight, the response is dropped
    /// and the newer session is kept.
    #[instrument(skip(self))]
    pub async fn fetch_identity(&self) -> Result<Identity> {
        let Some(token) = self.current_session().token().cloned() else {
            debug!("No token to fetch identity with");
            self.logout();
            return Err(AuthError::NotAuthenticated.into());
        };

        let fetched = self.api.me(&token).await;

        if self.current_session().token() != Some(&token) {
            debug!("Session changed while fetching identity");
            return Err(AuthError::SessionChanged.into());
        }

        let identity = match fetched {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "Failed to fetch identity, discarding session");
                self.logout();
                return Err(e);
            }
        };

        if let Err(e) = self.persist(&identity, &token) {
            warn!(error = %e, "Failed to persist fetched identity, discarding session");
            self.logout();
            return Err(e);
        }

        debug!(username = %identity.username(), "Identity refreshed");
        self.publish(Session::authenticated(identity.clone(), token));
        Ok(identity)
    }

    /// Snapshot of the current session.
    pub fn current_session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Observe session changes.
    ///
    /// The receiver starts at the current session; `changed()` resolves on
    /// every later login, logout or identity refresh, and errors once the
    /// store is dropped.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn persist(&self, identity: &Identity, token: &CredentialToken) -> Result<()> {
        let user = serde_json::to_string(identity).map_err(|e| InvalidInputError::Other {
            message: e.to_string(),
        })?;

        self.storage.set(USER_KEY, &user)?;
        self.storage.set(TOKEN_KEY, token.as_str())?;
        Ok(())
    }

    fn discard(&self) {
        self.clear_storage();
        self.publish(Session::empty());
    }

    fn clear_storage(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove persisted session entry");
            }
        }
    }

    /// Replace the session, notifying subscribers only on an actual change.
    fn publish(&self, session: Session) -> bool {
        self.state.send_if_modified(|current| {
            if *current == session {
                false
            } else {
                *current = session;
                true
            }
        })
    }
}

fn restore(user: &str, token: String) -> Result<Session> {
    let identity: Identity = serde_json::from_str(user).map_err(|e| {
        Error::from(InvalidInputError::Identity {
            reason: e.to_string(),
        })
    })?;
    let token = CredentialToken::new(token)?;
    Ok(Session::authenticated(identity, token))
}
