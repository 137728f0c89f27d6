use crate::errors::AppResult;
use crate::models::entry::AttendanceEntry;
use crate::models::owner_config::OwnerConfig;
use crate::store::{CONFIG_KEY, LOGS_KEY, LocalStore};

/// Application state for one kiosk session.
///
/// Hydrated once from the store; the attendance log is written back after
/// every change. The device identity is never cached here, see
/// [`Kiosk::is_authorized`].
pub struct Kiosk<S: LocalStore> {
    pub(crate) store: S,
    pub(crate) roster: Vec<String>,
    pub(crate) config: Option<OwnerConfig>,
    pub(crate) logs: Vec<AttendanceEntry>,
}

impl<S: LocalStore> Kiosk<S> {
    /// Load owner config and log from `store`. Missing keys mean
    /// "not set up" and "no entries".
    pub fn load(store: S, roster: Vec<String>) -> AppResult<Self> {
        let config = match store.get(CONFIG_KEY)? {
            Some(raw) => serde_json::from_str::<Option<OwnerConfig>>(&raw)?,
            None => None,
        };

        let logs = match store.get(LOGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            store,
            roster,
            config,
            logs,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True when `name` is on the kiosk roster (exact match).
    pub fn is_employee(&self, name: &str) -> bool {
        self.roster.iter().any(|e| e == name)
    }

    pub fn config(&self) -> Option<&OwnerConfig> {
        self.config.as_ref()
    }

    /// Attendance log, newest first.
    pub fn logs(&self) -> &[AttendanceEntry] {
        &self.logs
    }

    pub(crate) fn save_config(&mut self, cfg: OwnerConfig) -> AppResult<()> {
        let raw = serde_json::to_string(&cfg)?;
        self.store.set(CONFIG_KEY, &raw)?;
        self.config = Some(cfg);
        Ok(())
    }

    pub(crate) fn persist_logs(&mut self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.logs)?;
        self.store.set(LOGS_KEY, &raw)
    }
}
