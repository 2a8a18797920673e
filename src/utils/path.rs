//! Resolution of user supplied file paths (`--file`, `data_file` in the config).

use std::path::PathBuf;

/// Trim the input and expand a leading `~` to the home directory.
pub fn resolve_user_path(raw: &str) -> PathBuf {
    let raw = raw.trim();

    if let Some(home) = dirs::home_dir() {
        if raw == "~" {
            return home;
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            return home.join(rest);
        }
    }

    PathBuf::from(raw)
}
