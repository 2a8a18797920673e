// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::ActivityStore;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole activity log to `path` in `format`.
    /// An existing file is only replaced after confirmation or with `force`.
    pub fn export(
        store: &ActivityStore,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if store.is_empty() {
            warning("No activities logged yet, exporting an empty log.");
        }

        tracing::debug!(format = format.as_str(), path = %path.display(), "export");

        match format {
            ExportFormat::Csv => export_csv(store, path),
            ExportFormat::Json => export_json(store, path),
        }
    }
}
