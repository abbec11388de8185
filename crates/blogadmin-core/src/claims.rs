//! Claims decoding for credential tokens.
//!
//! The token is split on `.` and the second segment is base64-decoded and
//! parsed as JSON. There is no signature check: the claims are only used
//! to learn who just logged in.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Deserializer};

use crate::error::TokenError;
use crate::types::Identity;
use crate::Result;

/// Claims read from a credential token's payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Issued-at, seconds since the epoch.
    #[serde(default, deserialize_with = "numeric_date")]
    pub iat: Option<i64>,
    /// Expiry, seconds since the epoch. Informational only.
    #[serde(default, deserialize_with = "numeric_date")]
    pub exp: Option<i64>,
}

/// Whole seconds of a NumericDate. Fractions are truncated; anything that
/// is not a finite number reads as absent.
fn numeric_date<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        _ => None,
    })
}

impl TokenClaims {
    /// Build the identity these claims describe.
    pub fn identity(&self) -> Result<Identity> {
        Identity::new(&self.username, &self.email, self.role.clone())
    }
}

pub(crate) fn decode(token: &str) -> std::result::Result<TokenClaims, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    // Accept both alphabets, padded or not.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    Ok(serde_json::from_slice(&bytes)?)
}
