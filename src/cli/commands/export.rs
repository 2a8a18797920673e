use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::resolve_user_path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (_, store) = open_store(cfg)?;
        ExportLogic::export(&store, *format, &resolve_user_path(file), *force)?;
    }
    Ok(())
}
