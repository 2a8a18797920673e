use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ActivityStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;
    let data_path = cfg.data_path();

    println!("⚙️  Initializing ecotracker…");
    println!("📄 Data file : {}", data_path.display());

    if data_path.exists() {
        info("Data file already present, keeping existing activities.");
    } else {
        ActivityStore::new().save(&data_path)?;
        success(format!("Empty activity log created at {}", data_path.display()));
    }

    println!("🌍 Every small action counts towards a better planet! 🌱");
    Ok(())
}
