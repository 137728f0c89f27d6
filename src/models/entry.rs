use super::entry_type::EntryType;
use crate::utils::time::format_local;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One attendance event. Never modified after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub time: DateTime<Utc>,
}

impl AttendanceEntry {
    /// Build an entry with a fresh opaque id.
    pub fn new(name: &str, kind: EntryType, time: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            kind,
            time,
        }
    }

    /// ISO-8601 form used in the store and in exports.
    pub fn time_iso(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    pub fn time_local(&self, fmt: &str) -> String {
        format_local(&self.time, fmt)
    }
}

/// Opaque unique identifier (entries and device identities).
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
