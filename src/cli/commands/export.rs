use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, default_file_name};
use crate::ui::messages::warning;
use chrono::Utc;
use std::path::PathBuf;

use super::{audit, open_kiosk, pin_or_prompt};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        pin,
        force,
    } = cmd
    {
        let kiosk = open_kiosk(cfg)?;
        let pin = pin_or_prompt(pin)?;
        let content = kiosk.export(&pin, *format)?;

        let rows = kiosk.logs().len();
        if rows == 0 {
            warning("The log is empty: only the header will be written.");
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(*format, &Utc::now())),
        };

        ExportLogic::write(&path, &content, *format, rows, *force)?;
        audit(
            &kiosk,
            "export",
            format.as_str(),
            &format!("Exported {rows} entries to {}", path.display()),
        );
    }
    Ok(())
}
