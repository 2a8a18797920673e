pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod report;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ActivityStore;
use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::PathBuf;

/// Load the configured data file (an empty log when it does not exist yet).
pub(crate) fn open_store(cfg: &Config) -> AppResult<(PathBuf, ActivityStore)> {
    let path = cfg.data_path();
    let store = ActivityStore::open(&path)?;
    Ok((path, store))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
