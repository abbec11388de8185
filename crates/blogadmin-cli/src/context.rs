//! Wiring of the session store from command-line options.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use blogadmin_core::{ApiUrl, SessionStore};
use blogadmin_file::FileStorage;
use blogadmin_http::HttpAuthApi;

use crate::cli::Cli;

/// The store every command runs against.
pub type Store = SessionStore<FileStorage, HttpAuthApi>;

/// Resolve where the session lives.
pub fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }

    let dirs =
        ProjectDirs::from("", "", "blogadmin").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Build the store and restore whatever session is on disk.
pub fn open_store(cli: &Cli) -> Result<Store> {
    let api_url = ApiUrl::new(&cli.api).context("Invalid API URL")?;
    let api = HttpAuthApi::new(api_url).context("Failed to create HTTP client")?;
    let root = data_dir(cli)?;

    tracing::debug!(root = %root.display(), api = %cli.api, "Opening session store");
    Ok(SessionStore::open(FileStorage::new(root), api))
}
