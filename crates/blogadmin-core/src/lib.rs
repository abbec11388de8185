//! blogadmin-core - session core for the blog admin client.
//!
//! All authenticated state flows through a [`SessionStore`]; the
//! [`RouteGuard`] decides what the protected dashboard may show.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod memory;
pub mod session;
pub mod token;
pub mod traits;
pub mod types;

pub use claims::TokenClaims;
pub use credentials::Credentials;
pub use error::Error;
pub use session::{GuardDecision, RouteGuard, SessionStore, SignIn};
pub use token::CredentialToken;
pub use traits::{AuthApi, Router, Storage};
pub use types::{ApiUrl, Identity, Session};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
