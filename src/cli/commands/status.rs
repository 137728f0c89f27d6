use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::BindingState;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};

use super::list::print_entries;
use super::open_kiosk;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status = cmd {
        let kiosk = open_kiosk(cfg)?;

        header("Kiosk status");
        let state = kiosk.state()?;
        match state {
            BindingState::Authorized => success(format!("Device: {}", state.describe())),
            _ => warning(format!("Device: {}", state.describe())),
        }

        let logs = kiosk.logs();
        if logs.is_empty() {
            info("No entries yet.");
            return Ok(());
        }

        let shown = cfg.recent_entries.min(logs.len());
        info(format!("Latest {} of {} entries:", shown, logs.len()));
        print_entries(&logs[..shown], &cfg.time_format);
    }
    Ok(())
}
