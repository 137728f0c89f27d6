// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;

pub use self::csv::{parse_csv, to_csv};
pub use self::json::to_json;
pub use logic::ExportLogic;

use crate::errors::AppResult;
use crate::models::entry::AttendanceEntry;
use crate::ui::messages::success;
use crate::utils::time::date_stamp;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed ({rows} entries): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Render entries in the requested format.
pub fn render(entries: &[AttendanceEntry], format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Csv => to_csv(entries),
        ExportFormat::Json => to_json(entries),
    }
}

/// `attendance_YYYY-MM-DD.<ext>`, dated `now` in UTC.
pub fn default_file_name(format: ExportFormat, now: &DateTime<Utc>) -> String {
    format!("attendance_{}.{}", date_stamp(now), format.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_name_carries_date_and_extension() {
        let now = Utc.with_ymd_and_hms(2025, 10, 18, 7, 30, 0).unwrap();
        assert_eq!(
            default_file_name(ExportFormat::Csv, &now),
            "attendance_2025-10-18.csv"
        );
        assert_eq!(
            default_file_name(ExportFormat::Json, &now),
            "attendance_2025-10-18.json"
        );
    }
}
