//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{login::LoginArgs, open::OpenArgs, status::StatusArgs};

/// Production API the admin UI talks to.
pub const DEFAULT_API_URL: &str = "https://nestjs-blog-backend-api.desarrollo-software.xyz";

/// Sign in to the blog API and inspect the admin session.
#[derive(Parser, Debug)]
#[command(name = "blogadmin")]
#[command(author, version = env!("BLOGADMIN_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Blog API base URL
    #[arg(long, env = "BLOGADMIN_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api: String,

    /// Directory holding the persisted session [default: platform data dir]
    #[arg(long, env = "BLOGADMIN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist the session
    Login(LoginArgs),

    /// Discard the persisted session
    Logout,

    /// Re-fetch the identity from the API
    Whoami,

    /// Show the persisted session without contacting the API
    Status(StatusArgs),

    /// Ask the route guard whether a path may be rendered
    Open(OpenArgs),
}
