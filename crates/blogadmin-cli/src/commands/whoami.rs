//! Whoami command implementation.

use std::process::ExitCode;

use anyhow::Result;

use blogadmin_core::error::{AuthError, Error};

use crate::context::Store;
use crate::output;

pub async fn run(store: &Store) -> Result<ExitCode> {
    match store.fetch_identity().await {
        Ok(identity) => {
            output::identity(&identity);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Auth(AuthError::NotAuthenticated)) => {
            output::error("No active session. Run 'blogadmin login' first.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            output::error(&format!("Session discarded: {}", e));
            Ok(ExitCode::FAILURE)
        }
    }
}
