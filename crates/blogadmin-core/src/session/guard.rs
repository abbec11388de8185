//! Route guard for the protected subtree.

use tokio::sync::watch;
use tracing::debug;

use crate::traits::Router;
use crate::types::{Identity, Session};

/// Root of the authenticated area.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Public entry point anonymous visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of guarding a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested view.
    Render,
    /// Show nothing and navigate to the given path.
    Redirect(String),
}

/// Decides whether a path may render for the current session.
///
/// The guard holds no state of its own; every decision is a function of
/// the session passed in.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected: String,
    entry_point: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DASHBOARD_PATH, LOGIN_PATH)
    }
}

impl RouteGuard {
    /// Guard everything under `protected`, redirecting to `entry_point`.
    pub fn new(protected: impl Into<String>, entry_point: impl Into<String>) -> Self {
        let protected = protected.into();
        let protected = match protected.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            protected,
            entry_point: entry_point.into(),
        }
    }

    /// Returns true if `path` lies in the protected subtree.
    ///
    /// Query strings and fragments are ignored; the entry point itself is
    /// never protected.
    pub fn protects(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        if path == self.entry_point {
            return false;
        }
        if self.protected == "/" {
            return path.starts_with('/');
        }
        path == self.protected
            || path
                .strip_prefix(self.protected.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Decision for a protected view.
    pub fn decide(&self, session: &Session) -> GuardDecision {
        if session.identity().is_some() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(self.entry_point.clone())
        }
    }

    /// Decision for an arbitrary path. Unprotected paths always render.
    pub fn check(&self, session: &Session, path: &str) -> GuardDecision {
        if self.protects(path) {
            self.decide(session)
        } else {
            GuardDecision::Render
        }
    }

    /// Check the router's current path and navigate away if it is denied.
    pub fn enforce<R: Router + ?Sized>(&self, session: &Session, router: &R) -> GuardDecision {
        let path = router.current_path();
        let decision = self.check(session, &path);
        if let GuardDecision::Redirect(to) = &decision {
            debug!(from = %path, %to, "Redirecting away from protected path");
            router.navigate(to);
        }
        decision
    }

    /// Render a protected view, or redirect and render nothing.
    pub fn render<R, V, F>(&self, session: &Session, router: &R, view: F) -> Option<V>
    where
        R: Router + ?Sized,
        F: FnOnce(&Identity) -> V,
    {
        match session.identity() {
            Some(identity) => Some(view(identity)),
            None => {
                debug!(to = %self.entry_point, "No session, redirecting");
                router.navigate(&self.entry_point);
                None
            }
        }
    }

    /// Re-run [`enforce`](Self::enforce) on every session change.
    ///
    /// Evaluates once immediately, then after each login or logout. Returns
    /// when the session store is dropped.
    pub async fn watch<R: Router + ?Sized>(&self, mut sessions: watch::Receiver<Session>, router: &R) {
        loop {
            let session = sessions.borrow_and_update().clone();
            self.enforce(&session, router);
            if sessions.changed().await.is_err() {
                break;
            }
        }
    }
}
