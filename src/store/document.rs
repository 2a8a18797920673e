//! JSON document codec for the activity log.

use crate::errors::{AppError, AppResult};
use crate::models::Activity;

/// Render activities as a pretty-printed JSON array.
pub fn render(activities: &[Activity]) -> AppResult<String> {
    serde_json::to_string_pretty(activities)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// Parse a JSON array of activity objects.
///
/// Anything else (invalid JSON, a non-array root, unknown `type`, missing
/// fields) is reported as [`AppError::MalformedDocument`].
pub fn parse(document: &str) -> AppResult<Vec<Activity>> {
    let activities: Vec<Activity> = serde_json::from_str(document)?;
    Ok(activities)
}

/// Same as [`parse`] for raw file content; bytes that are not UTF-8 are a
/// malformed document too.
pub fn parse_bytes(bytes: &[u8]) -> AppResult<Vec<Activity>> {
    let activities: Vec<Activity> = serde_json::from_slice(bytes)?;
    Ok(activities)
}
