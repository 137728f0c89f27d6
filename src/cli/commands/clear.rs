use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, success};

use super::{audit, open_kiosk, pin_or_prompt};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { pin, yes } = cmd {
        let mut kiosk = open_kiosk(cfg)?;
        let pin = pin_or_prompt(pin)?;

        let confirmed = *yes
            || ask_confirmation(&format!(
                "Delete ALL {} attendance entries? This action is irreversible.",
                kiosk.logs().len()
            ));

        let removed = kiosk.clear_logs(&pin, confirmed)?;

        success(format!("Log cleared ({removed} entries removed)."));
        audit(
            &kiosk,
            "clear",
            "attendance_logs",
            &format!("{removed} entries removed"),
        );
    }
    Ok(())
}
