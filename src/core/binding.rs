use super::kiosk::Kiosk;
use crate::errors::{AppError, AppResult};
use crate::models::entry::new_id;
use crate::models::owner_config::OwnerConfig;
use crate::store::{DEVICE_KEY, LocalStore};

/// Where this device stands with respect to the stored owner config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unconfigured,
    Authorized,
    Unauthorized,
}

impl BindingState {
    pub fn describe(&self) -> &'static str {
        match self {
            BindingState::Unconfigured => "not configured (run `setup`)",
            BindingState::Authorized => "bound and authorized",
            BindingState::Unauthorized => "not authorized (owner must `rebind`)",
        }
    }
}

impl<S: LocalStore> Kiosk<S> {
    /// Identity currently persisted for this device, if any.
    pub fn device_id(&self) -> AppResult<Option<String>> {
        self.store.get(DEVICE_KEY)
    }

    /// Recomputed on every call: config present and the persisted device
    /// identity equal to the bound one.
    pub fn is_authorized(&self) -> AppResult<bool> {
        let Some(cfg) = &self.config else {
            return Ok(false);
        };
        Ok(self.device_id()?.as_deref() == Some(cfg.device_id.as_str()))
    }

    pub fn state(&self) -> AppResult<BindingState> {
        if self.config.is_none() {
            Ok(BindingState::Unconfigured)
        } else if self.is_authorized()? {
            Ok(BindingState::Authorized)
        } else {
            Ok(BindingState::Unauthorized)
        }
    }

    /// First-time setup: store the owner and bind this device.
    pub fn setup(&mut self, email: &str, pin: &str) -> AppResult<String> {
        if email.is_empty() || pin.is_empty() {
            return Err(AppError::Validation(
                "Owner email and PIN are both required".into(),
            ));
        }
        if self.config.is_some() {
            return Err(AppError::Validation(
                "Owner already configured: use `rebind` to bind this device".into(),
            ));
        }

        let did = self.bind_device()?;
        self.save_config(OwnerConfig {
            owner_email: email.to_string(),
            owner_pin: pin.to_string(),
            device_id: did.clone(),
        })?;
        Ok(did)
    }

    /// Owner re-login: bind this device with a fresh identity.
    pub fn rebind(&mut self, email: &str, pin: &str) -> AppResult<String> {
        let Some(cfg) = self.config.clone() else {
            return Err(AppError::Unauthorized("Owner is not configured yet".into()));
        };
        if !cfg.credentials_match(email, pin) {
            return Err(AppError::Unauthorized("Wrong owner email or PIN".into()));
        }

        let did = self.bind_device()?;
        self.save_config(OwnerConfig {
            device_id: did.clone(),
            ..cfg
        })?;
        Ok(did)
    }

    /// Drop this device's identity, as if its local storage was wiped.
    pub fn forget_device(&mut self) -> AppResult<()> {
        self.store.remove(DEVICE_KEY)
    }

    fn bind_device(&mut self) -> AppResult<String> {
        let did = new_id();
        self.store.set(DEVICE_KEY, &did)?;
        Ok(did)
    }
}
