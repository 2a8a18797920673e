use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::views::{ViewStyle, print_activities};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_, store) = open_store(cfg)?;
    print_activities(&store, &ViewStyle::from_config(cfg));
    Ok(())
}
