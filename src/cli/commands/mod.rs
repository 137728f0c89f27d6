pub mod admin;
pub mod clear;
pub mod config;
pub mod device;
pub mod employees;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod rebind;
pub mod record;
pub mod setup;
pub mod status;

use crate::config::Config;
use crate::core::Kiosk;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{ask_line, warning};

/// Open the store and hydrate the kiosk state.
pub(crate) fn open_kiosk(cfg: &Config) -> AppResult<Kiosk<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    Kiosk::load(store, cfg.employees.clone())
}

/// Write to the internal log; a failure here never fails the command.
pub(crate) fn audit(kiosk: &Kiosk<SqliteStore>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&kiosk.store().pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Use the PIN given on the command line, or ask for it.
pub(crate) fn pin_or_prompt(pin: &Option<String>) -> AppResult<String> {
    match pin {
        Some(p) => Ok(p.clone()),
        None => Ok(ask_line("Owner PIN")?),
    }
}
