use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::ActivityStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        let (path, mut store) = match open_store(cfg) {
            Ok(opened) => opened,
            Err(AppError::MalformedDocument(reason)) => {
                return reset_unreadable(cfg, &reason, *force);
            }
            Err(e) => return Err(e),
        };

        if store.is_empty() {
            info("No activities logged yet, nothing to clear.");
            return Ok(());
        }

        if !*force
            && !ask_confirmation(&format!(
                "Delete all {} activities? This action is irreversible.",
                store.len()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        store.clear();
        store.save(&path)?;

        success("All data cleared!");
    }

    Ok(())
}

/// Overwrite a data file that no longer parses with an empty log.
fn reset_unreadable(cfg: &Config, reason: &str, force: bool) -> AppResult<()> {
    let path = cfg.data_path();

    if !force
        && !ask_confirmation(&format!(
            "Data file {} is unreadable ({reason}). Reset it to an empty log?",
            path.display()
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    ActivityStore::new().save(&path)?;
    success("All data cleared!");
    Ok(())
}
