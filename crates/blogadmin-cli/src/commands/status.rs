//! Status command implementation.

use std::process::ExitCode;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crate::context::Store;
use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the session as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable view of the persisted session.
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    username: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    issued_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

pub fn run(store: &Store, args: StatusArgs) -> Result<ExitCode> {
    let session = store.current_session();
    let (Some(identity), Some(token)) = (session.identity(), session.token()) else {
        if args.json {
            output::json(&serde_json::Value::Null)?;
        } else {
            output::field("Session", "none");
        }
        return Ok(ExitCode::FAILURE);
    };

    // Restored sessions may carry tokens whose payload we cannot read.
    let (issued_at, expires_at) = match token.claims() {
        Ok(claims) => (
            claims.iat.and_then(timestamp),
            claims.exp.and_then(timestamp),
        ),
        Err(e) => {
            tracing::debug!(error = %e, "Token claims unreadable");
            (None, None)
        }
    };

    if args.json {
        output::json_pretty(&StatusReport {
            username: identity.username(),
            email: identity.email(),
            role: identity.role(),
            admin: identity.is_admin(),
            issued_at,
            expires_at,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    output::identity(identity);
    output::field("Admin", if identity.is_admin() { "yes" } else { "no" });
    if let Some(issued) = issued_at {
        output::field("Issued", &issued.to_rfc3339());
    }
    if let Some(expires) = expires_at {
        let state = if expires <= Utc::now() { " (expired)" } else { "" };
        output::field("Expires", &format!("{}{}", expires.to_rfc3339(), state));
    }

    Ok(ExitCode::SUCCESS)
}

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
