//! Local key→string store.
//!
//! The kiosk keeps everything it knows in three keys of a flat,
//! device-scoped store. There are no transactions across keys and the
//! last writer wins.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Owner configuration record (JSON object).
pub const CONFIG_KEY: &str = "kiosk_config";
/// Identity of this device (raw string).
pub const DEVICE_KEY: &str = "kiosk_deviceId";
/// Attendance log (JSON array, newest first).
pub const LOGS_KEY: &str = "attendance_logs";

pub trait LocalStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
