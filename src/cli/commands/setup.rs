use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::{audit, open_kiosk};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Setup { email, pin } = cmd {
        let mut kiosk = open_kiosk(cfg)?;
        let did = kiosk.setup(email, pin)?;

        success("Setup complete: this device is now bound to the kiosk.");
        audit(&kiosk, "setup", email, &format!("Device bound: {did}"));
    }
    Ok(())
}
