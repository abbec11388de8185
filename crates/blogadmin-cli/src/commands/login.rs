//! Login command implementation.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use blogadmin_core::Credentials;

use crate::context::Store;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long, env = "BLOGADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(store: &Store, args: LoginArgs) -> Result<ExitCode> {
    let credentials = Credentials::new(args.username, args.password);

    eprintln!("{}", "Signing in...".dimmed());

    match store.sign_in(&credentials).await {
        Ok(signed_in) => {
            output::success("Logged in successfully");
            println!();
            output::identity(&signed_in.identity);
            output::field("Redirect", signed_in.redirect_to);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Sign-in failed");
            output::error(&e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
