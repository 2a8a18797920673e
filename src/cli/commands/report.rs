//! Read-only report commands: summary, stats, suggest, compare.

use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ui::views::{
    ViewStyle, print_comparison, print_statistics, print_suggestions, print_summary,
};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (_, store) = open_store(cfg)?;
    let style = ViewStyle::from_config(cfg);

    match cmd {
        Commands::Summary => print_summary(&Core::summary(&store), &style),
        Commands::Stats => print_statistics(&Core::statistics(&store), &style),
        Commands::Suggest => print_suggestions(&Core::suggestions(&store), &style),
        Commands::Compare => print_comparison(&Core::compare(&store), &style),
        _ => {}
    }

    Ok(())
}
