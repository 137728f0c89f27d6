use crate::errors::AppResult;
use crate::models::entry::AttendanceEntry;

/// Pretty-printed JSON array, same shape as the stored log.
pub fn to_json(entries: &[AttendanceEntry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
