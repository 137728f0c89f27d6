use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success};

use super::{audit, open_kiosk};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Device { show, forget, yes } = cmd {
        let mut kiosk = open_kiosk(cfg)?;

        if *show || !*forget {
            match kiosk.device_id()? {
                Some(did) => info(format!("Device identity: {did}")),
                None => info("No device identity stored on this device."),
            }
            info(format!("State: {}", kiosk.state()?.describe()));
        }

        if *forget {
            let confirmed = *yes
                || ask_confirmation(
                    "Forget this device? The kiosk will stop recording until the owner rebinds it.",
                );
            if !confirmed {
                return Err(AppError::ConfirmationDeclined(
                    "device identity kept".into(),
                ));
            }

            kiosk.forget_device()?;
            success("Device identity removed.");
            audit(&kiosk, "device_forget", "kiosk_deviceId", "Device identity removed");
        }
    }
    Ok(())
}
