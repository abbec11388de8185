//! Open command implementation.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use blogadmin_core::memory::MemoryRouter;
use blogadmin_core::{GuardDecision, RouteGuard};

use crate::context::Store;
use crate::output;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Path to navigate to, e.g. /dashboard/posts
    pub path: String,
}

pub fn run(store: &Store, args: OpenArgs) -> Result<ExitCode> {
    let session = store.current_session();
    let router = MemoryRouter::new(&args.path);

    match RouteGuard::default().enforce(&session, &router) {
        GuardDecision::Render => {
            match session.identity() {
                Some(identity) => println!("Rendering {} as {}", args.path, identity.username()),
                None => println!("Rendering {}", args.path),
            }
            Ok(ExitCode::SUCCESS)
        }
        GuardDecision::Redirect(to) => {
            println!("Redirected to {}", to);
            output::field("Visited", &router.history().join(" -> "));
            Ok(ExitCode::SUCCESS)
        }
    }
}
