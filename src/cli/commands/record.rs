use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry_type::EntryType;
use crate::ui::messages::success;
use crate::utils::colors::colorize_in_out;

use super::open_kiosk;

/// `in <name>` and `out <name>`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (name, kind) = match cmd {
        Commands::In { name } => (name, EntryType::In),
        Commands::Out { name } => (name, EntryType::Out),
        _ => return Ok(()),
    };

    let mut kiosk = open_kiosk(cfg)?;
    let entry = kiosk.record(name.trim(), kind)?;

    success(format!(
        "{} {} at {}",
        entry.name,
        colorize_in_out(entry.kind.label(), entry.kind.is_in()),
        entry.time_local(&cfg.time_format)
    ));
    Ok(())
}
