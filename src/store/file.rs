use super::document;
use crate::errors::{AppError, AppResult};
use crate::models::Activity;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read and parse the document at `path`.
pub fn read_activities(path: &Path) -> AppResult<Vec<Activity>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::FileNotFound(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    document::parse_bytes(&bytes)
}

/// Write the document for `activities` to `path`.
///
/// The content goes to a sibling temporary file first and is then renamed
/// over the target, so a failed write leaves the previous document intact.
pub fn write_activities(path: &Path, activities: &[Activity]) -> AppResult<()> {
    let json = document::render(activities)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json)?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(AppError::Io(e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
