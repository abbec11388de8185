//! Authenticated identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Display attributes of the logged-in user.
///
/// Username and email are always non-empty; this also holds for values
/// deserialized from storage or from `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityFields")]
pub struct Identity {
    username: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

#[derive(Deserialize)]
struct IdentityFields {
    username: String,
    email: String,
    #[serde(default)]
    role: Option<String>,
}

impl TryFrom<IdentityFields> for Identity {
    type Error = Error;

    fn try_from(fields: IdentityFields) -> Result<Self, Self::Error> {
        Identity::new(fields.username, fields.email, fields.role)
    }
}

impl Identity {
    /// Create an identity, validating the required fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        role: Option<String>,
    ) -> Result<Self, Error> {
        let username = username.into();
        let email = email.into();

        if username.trim().is_empty() {
            return Err(InvalidInputError::Identity {
                reason: "username must not be empty".to_string(),
            }
            .into());
        }
        if email.trim().is_empty() {
            return Err(InvalidInputError::Identity {
                reason: "email must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            username,
            email,
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Both `"admin"` and `"ADMIN"` occur in issued tokens.
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_absent_role() {
        let identity = Identity::new("testuser", "t@example.com", None).unwrap();
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, r#"{"username":"testuser","email":"t@example.com"}"#);
    }

    #[test]
    fn deserializes_with_role() {
        let identity: Identity =
            serde_json::from_str(r#"{"username":"root","email":"r@x.io","role":"admin"}"#)
                .unwrap();
        assert_eq!(identity.role(), Some("admin"));
        assert!(identity.is_admin());
    }

    #[test]
    fn rejects_empty_fields_on_deserialize() {
        let result: Result<Identity, _> =
            serde_json::from_str(r#"{"username":"","email":"r@x.io"}"#);
        assert!(result.is_err());
        let result: Result<Identity, _> = serde_json::from_str(r#"{"username":"root"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn admin_check_is_case_insensitive() {
        let upper = Identity::new("a", "a@x.io", Some("ADMIN".to_string())).unwrap();
        let editor = Identity::new("b", "b@x.io", Some("editor".to_string())).unwrap();
        let none = Identity::new("c", "c@x.io", None).unwrap();
        assert!(upper.is_admin());
        assert!(!editor.is_admin());
        assert!(!none.is_admin());
    }

    #[test]
    fn display_shows_username_and_email() {
        let identity = Identity::new("testuser", "t@example.com", None).unwrap();
        assert_eq!(identity.to_string(), "testuser <t@example.com>");
    }
}
