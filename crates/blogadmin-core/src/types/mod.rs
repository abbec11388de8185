//! Core blogadmin types.
//!
//! These types enforce their invariants at construction time, so an empty
//! username or a half-populated session cannot be built.

mod api_url;
mod identity;
mod session;

pub use api_url::ApiUrl;
pub use identity::Identity;
pub use session::Session;
