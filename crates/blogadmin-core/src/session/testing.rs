//! Test doubles for the session module.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tokio::sync::Notify;

use crate::error::{AuthError, ProtocolError, StorageError, TransportError};
use crate::memory::MemoryStorage;
use crate::traits::{AuthApi, Storage};
use crate::types::Identity;
use crate::{CredentialToken, Credentials, Result};

pub(crate) fn identity(username: &str) -> Identity {
    Identity::new(username, format!("{username}@example.com"), None).unwrap()
}

pub(crate) fn token(value: &str) -> CredentialToken {
    CredentialToken::new(value).unwrap()
}

/// A JWT-shaped token with the given claims and a bogus signature.
pub(crate) fn unsigned_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

/// What the stub answers to `login`.
pub(crate) enum LoginReply {
    Token(String),
    Rejected(Option<String>),
    Status(u16),
    Offline,
}

pub(crate) struct StubApi {
    login: LoginReply,
    me: Option<Identity>,
    gate: Option<Arc<Notify>>,
    me_token: Mutex<Option<String>>,
}

impl StubApi {
    /// Every call fails with a connection error.
    pub(crate) fn offline() -> Self {
        Self {
            login: LoginReply::Offline,
            me: None,
            gate: None,
            me_token: Mutex::new(None),
        }
    }

    pub(crate) fn replying(login: LoginReply) -> Self {
        Self {
            login,
            ..Self::offline()
        }
    }

    pub(crate) fn with_me(mut self, identity: Identity) -> Self {
        self.me = Some(identity);
        self
    }

    /// `me` waits for the gate before answering.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn last_me_token(&self) -> Option<String> {
        self.me_token.lock().unwrap().clone()
    }
}

fn offline() -> crate::Error {
    TransportError::Connection {
        message: "connection refused".to_string(),
    }
    .into()
}

#[async_trait]
impl AuthApi for StubApi {
    async fn login(&self, _credentials: &Credentials) -> Result<CredentialToken> {
        match &self.login {
            LoginReply::Token(token) => CredentialToken::new(token.clone()),
            LoginReply::Rejected(message) => Err(AuthError::Rejected {
                message: message.clone(),
            }
            .into()),
            LoginReply::Status(status) => Err(ProtocolError::new(*status, None).into()),
            LoginReply::Offline => Err(offline()),
        }
    }

    async fn me(&self, token: &CredentialToken) -> Result<Identity> {
        *self.me_token.lock().unwrap() = Some(token.as_str().to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.me.clone().ok_or_else(offline)
    }
}

/// Storage whose reads, or writes to one key, fail.
pub(crate) struct FlakyStorage {
    pub(crate) inner: MemoryStorage,
    fail_reads: bool,
    fail_writes_to: Option<&'static str>,
}

impl FlakyStorage {
    pub(crate) fn failing_reads() -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_reads: true,
            fail_writes_to: None,
        }
    }

    pub(crate) fn failing_writes_to(key: &'static str) -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_reads: false,
            fail_writes_to: Some(key),
        }
    }
}

impl Storage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                message: "disk on fire".to_string(),
            }
            .into());
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes_to == Some(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "disk full".to_string(),
            }
            .into());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}
