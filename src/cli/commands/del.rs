use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::views::describe;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, force } = cmd {
        let (path, mut store) = open_store(cfg)?;

        // validate before prompting so a bad index never asks for confirmation
        let target = match index.checked_sub(1).and_then(|i| store.activities().get(i)) {
            Some(a) => describe(a),
            None => {
                return Err(AppError::IndexOutOfRange {
                    index: *index,
                    len: store.len(),
                });
            }
        };

        if !*force
            && !ask_confirmation(&format!(
                "Delete activity #{index} ({target})? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = store.delete(*index)?;
        store.save(&path)?;

        success(format!("Deleted activity from {}", removed.date_str()));
    }

    Ok(())
}
