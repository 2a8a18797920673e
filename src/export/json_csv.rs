// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::to_rows;
use crate::export::notify_export_success;
use crate::store::ActivityStore;
use crate::ui::messages::info;
use std::path::Path;

/// JSON export is the persisted document itself.
pub(crate) fn export_json(store: &ActivityStore, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));
    store.save(path)?;
    notify_export_success("JSON", path, store.len());
    Ok(())
}

/// CSV export, header row derived from `ActivityExport` by serde.
pub(crate) fn export_csv(store: &ActivityStore, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in to_rows(store.activities()) {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, store.len());
    Ok(())
}
