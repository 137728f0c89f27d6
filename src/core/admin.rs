//! Owner-only operations. The PIN comparison gates the admin screens and
//! nothing more; it is not an authentication mechanism.

use super::kiosk::Kiosk;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, render};
use crate::store::LocalStore;

/// What the admin screen shows about the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub owner_email: String,
    pub device_id: String,
}

impl<S: LocalStore> Kiosk<S> {
    /// `true` iff `pin` equals the stored owner PIN.
    pub fn admin_authenticate(&self, pin: &str) -> bool {
        self.config.as_ref().is_some_and(|c| c.pin_matches(pin))
    }

    pub fn owner_summary(&self) -> Option<OwnerSummary> {
        self.config.as_ref().map(|c| OwnerSummary {
            owner_email: c.owner_email.clone(),
            device_id: c.device_id.clone(),
        })
    }

    fn require_pin(&self, pin: &str) -> AppResult<()> {
        if self.config.is_none() {
            return Err(AppError::Unauthorized("Owner is not configured yet".into()));
        }
        if !self.admin_authenticate(pin) {
            return Err(AppError::Unauthorized("Wrong PIN".into()));
        }
        Ok(())
    }

    /// Render the full log (newest first) after checking the owner PIN.
    pub fn export(&self, pin: &str, format: ExportFormat) -> AppResult<String> {
        self.require_pin(pin)?;
        render(&self.logs, format)
    }

    /// CSV projection of the whole log, PIN-gated.
    pub fn export_csv(&self, pin: &str) -> AppResult<String> {
        self.export(pin, ExportFormat::Csv)
    }

    /// Empty the log. Needs both an explicit confirmation and the owner PIN.
    /// Returns the number of removed entries.
    pub fn clear_logs(&mut self, pin: &str, confirmed: bool) -> AppResult<usize> {
        if !confirmed {
            return Err(AppError::ConfirmationDeclined("log not cleared".into()));
        }
        self.require_pin(pin)?;

        let removed = self.logs.len();
        self.logs.clear();
        self.persist_logs()?;
        Ok(removed)
    }
}
