use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};

use super::{open_kiosk, pin_or_prompt};

/// PIN check for the admin view; only reveals the owner summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin { pin } = cmd {
        let kiosk = open_kiosk(cfg)?;

        let Some(summary) = kiosk.owner_summary() else {
            return Err(AppError::Unauthorized("Owner is not configured yet".into()));
        };

        let pin = pin_or_prompt(pin)?;
        if !kiosk.admin_authenticate(&pin) {
            return Err(AppError::Unauthorized("Wrong PIN".into()));
        }

        success("Authenticated as owner.");
        header("Admin");
        println!("Owner email      : {}", summary.owner_email);
        println!("Bound device id  : {}", summary.device_id);
        println!(
            "This device      : {}",
            kiosk.device_id()?.unwrap_or_else(|| "-".to_string())
        );
        println!("Device state     : {}", kiosk.state()?.describe());
        println!("Entries          : {}", kiosk.logs().len());
    }
    Ok(())
}
