//! Logout command implementation.

use std::process::ExitCode;

use anyhow::Result;

use crate::context::Store;
use crate::output;

pub fn run(store: &Store) -> Result<ExitCode> {
    store.logout();
    output::success("Logged out");
    Ok(ExitCode::SUCCESS)
}
