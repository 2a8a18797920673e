use crate::cli::commands::open_store;
use crate::cli::parser::{AddActivity, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Measurement, TransportMode};
use crate::ui::messages::success;
use crate::ui::views::describe;

/// Log a new activity and persist the updated log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { activity } = cmd {
        let measurement = match activity {
            AddActivity::Transport { mode, distance } => Measurement::Transport {
                mode: TransportMode::from_code(mode)?,
                distance_km: *distance,
            },
            AddActivity::Electricity { kwh } => Measurement::Electricity { kwh: *kwh },
            AddActivity::Water { litres } => Measurement::Water { litres: *litres },
            AddActivity::Waste { kg } => Measurement::Waste { kg: *kg },
        };

        let (path, mut store) = open_store(cfg)?;
        let line = describe(store.add(measurement)?);
        store.save(&path)?;

        success(format!("Added: {line}"));
    }

    Ok(())
}
