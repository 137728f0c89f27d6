use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::{audit, open_kiosk};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rebind { email, pin } = cmd {
        let mut kiosk = open_kiosk(cfg)?;
        let did = kiosk.rebind(email, pin)?;

        success("New device bound.");
        audit(&kiosk, "rebind", email, &format!("Device bound: {did}"));
    }
    Ok(())
}
