//! CSV projection of the attendance log.
//!
//! Header `id,name,type,time`, every field double-quoted, inner quotes
//! doubled, rows separated by `\n` with no trailing newline.

use crate::errors::{AppError, AppResult};
use crate::models::entry::AttendanceEntry;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

const HEADER: [&str; 4] = ["id", "name", "type", "time"];

pub fn to_csv(entries: &[AttendanceEntry]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;

    for e in entries {
        let time = e.time_iso();
        wtr.write_record([e.id.as_str(), e.name.as_str(), e.kind.et_as_str(), time.as_str()])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let mut out =
        String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding: {e}")))?;

    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Read an export back into entries (same order as the file).
pub fn parse_csv(text: &str) -> AppResult<Vec<AttendanceEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}
