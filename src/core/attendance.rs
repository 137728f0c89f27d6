use super::kiosk::Kiosk;
use crate::errors::{AppError, AppResult};
use crate::models::entry::AttendanceEntry;
use crate::models::entry_type::EntryType;
use crate::store::LocalStore;
use chrono::{DateTime, Utc};

impl<S: LocalStore> Kiosk<S> {
    /// Record a tap for `name`. Any sequence of in/out is accepted.
    pub fn record(&mut self, name: &str, kind: EntryType) -> AppResult<AttendanceEntry> {
        self.record_at(name, kind, Utc::now())
    }

    pub(crate) fn record_at(
        &mut self,
        name: &str,
        kind: EntryType,
        now: DateTime<Utc>,
    ) -> AppResult<AttendanceEntry> {
        if !self.is_authorized()? {
            return Err(AppError::Unauthorized(
                "This device is not authorized: the owner must set up or rebind it".into(),
            ));
        }
        if !self.is_employee(name) {
            return Err(AppError::Validation(format!(
                "'{name}' is not on the employee list"
            )));
        }

        // keep the log time-ordered even if the wall clock steps back
        let time = match self.logs.first() {
            Some(newest) if newest.time > now => newest.time,
            _ => now,
        };

        let entry = AttendanceEntry::new(name, kind, time);
        self.logs.insert(0, entry.clone());
        self.persist_logs()?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LOGS_KEY, MemoryStore};
    use chrono::Duration;

    fn bound_kiosk() -> Kiosk<MemoryStore> {
        let mut k = Kiosk::load(
            MemoryStore::new(),
            vec!["กุ๊ก".into(), "จอย".into(), "Say \"hi\"".into()],
        )
        .unwrap();
        k.setup("a@x.com", "1234").unwrap();
        k
    }

    #[test]
    fn check_in_then_out_scenario() {
        let mut k = bound_kiosk();

        k.record("กุ๊ก", EntryType::In).unwrap();
        assert_eq!(k.logs().len(), 1);
        assert_eq!(k.logs()[0].kind, EntryType::In);

        k.record("กุ๊ก", EntryType::Out).unwrap();
        assert_eq!(k.logs().len(), 2);
        assert_eq!(k.logs()[0].name, "กุ๊ก");
        assert_eq!(k.logs()[0].kind, EntryType::Out);
    }

    #[test]
    fn unauthorized_device_never_touches_log() {
        let mut k = bound_kiosk();
        k.record("จอย", EntryType::In).unwrap();
        k.forget_device().unwrap();
        let stored = k.store().get(LOGS_KEY).unwrap();

        let err = k.record("จอย", EntryType::Out).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        assert_eq!(k.logs().len(), 1);
        assert_eq!(k.store().get(LOGS_KEY).unwrap(), stored);
    }

    #[test]
    fn unconfigured_device_cannot_record() {
        let mut k = Kiosk::load(MemoryStore::new(), vec!["จอย".into()]).unwrap();
        assert!(matches!(
            k.record("จอย", EntryType::In),
            Err(AppError::Unauthorized(_))
        ));
        assert!(k.logs().is_empty());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let mut k = bound_kiosk();
        assert!(matches!(
            k.record("Mallory", EntryType::In),
            Err(AppError::Validation(_))
        ));
        assert!(k.logs().is_empty());
    }

    #[test]
    fn repeated_check_ins_are_kept() {
        let mut k = bound_kiosk();
        k.record("จอย", EntryType::In).unwrap();
        k.record("จอย", EntryType::In).unwrap();
        assert_eq!(k.logs().len(), 2);
        assert!(k.logs().iter().all(|e| e.kind == EntryType::In));
        assert_ne!(k.logs()[0].id, k.logs()[1].id);
    }

    #[test]
    fn log_is_written_through() {
        let mut k = bound_kiosk();
        let entry = k.record("กุ๊ก", EntryType::In).unwrap();

        let reloaded = Kiosk::load(k.store().clone(), vec![]).unwrap();
        assert_eq!(reloaded.logs(), &[entry]);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let mut k = bound_kiosk();
        let t0 = Utc::now();

        let first = k.record_at("จอย", EntryType::In, t0).unwrap();
        let second = k
            .record_at("จอย", EntryType::Out, t0 - Duration::minutes(5))
            .unwrap();
        let third = k
            .record_at("จอย", EntryType::In, t0 + Duration::minutes(1))
            .unwrap();

        assert_eq!(first.time, t0);
        assert_eq!(second.time, t0);
        assert_eq!(third.time, t0 + Duration::minutes(1));
        assert_eq!(k.logs()[0].id, third.id);
    }
}
