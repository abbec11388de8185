//! Session management.
//!
//! [`SessionStore`] owns the single source of truth for who is logged in and
//! mirrors it into durable [`Storage`](crate::traits::Storage).
//! [`RouteGuard`] turns that state into render-or-redirect decisions for the
//! protected part of the application.

mod guard;
mod login;
mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use guard::{DASHBOARD_PATH, GuardDecision, LOGIN_PATH, RouteGuard};
pub use login::SignIn;
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
