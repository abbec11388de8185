//! Session value.

use crate::token::CredentialToken;
use crate::types::Identity;

/// The pairing of identity and credential token.
///
/// Either both are present or neither is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session(Option<Authenticated>);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Authenticated {
    identity: Identity,
    token: CredentialToken,
}

impl Session {
    /// A session with nobody logged in.
    pub fn empty() -> Self {
        Self(None)
    }

    /// A session for the given identity and token.
    pub fn authenticated(identity: Identity, token: CredentialToken) -> Self {
        Self(Some(Authenticated { identity, token }))
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref().map(|a| &a.identity)
    }

    pub fn token(&self) -> Option<&CredentialToken> {
        self.0.as_ref().map(|a| &a.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_has_nothing() {
        let session = Session::empty();
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert!(session.token().is_none());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let token = CredentialToken::new("super-secret").unwrap();
        let identity = Identity::new("ana", "ana@x.io", None).unwrap();
        let debug = format!("{:?}", Session::authenticated(identity, token));
        assert!(!debug.contains("super-secret"));
    }
}
