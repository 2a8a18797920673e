use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::ActivityStore;
use crate::ui::messages::{success, warning};
use crate::utils::path::resolve_user_path;

/// Replace the current log with the document at `--file` and persist it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let source = resolve_user_path(file);
        let path = cfg.data_path();

        // a missing or malformed source leaves the current log untouched
        let mut store = ActivityStore::new();
        let loaded = store.load(&source)?;

        // the current log is replaced, it only needs to be readable for the warning
        match ActivityStore::open(&path) {
            Ok(previous) if !previous.is_empty() => warning(format!(
                "Replaced {} previously logged activities.",
                previous.len()
            )),
            Ok(_) => {}
            Err(AppError::MalformedDocument(reason)) => {
                warning(format!("Replaced unreadable data file ({reason})."))
            }
            Err(e) => return Err(e),
        }

        store.save(&path)?;

        success(format!(
            "Data loaded from {} ({loaded} activities)",
            source.display()
        ));
    }

    Ok(())
}
