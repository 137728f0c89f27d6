use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::AttendanceEntry;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

use super::open_kiosk;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let kiosk = open_kiosk(cfg)?;
        let logs = kiosk.logs();

        if logs.is_empty() {
            info("No entries.");
            return Ok(());
        }

        let n = limit.unwrap_or(logs.len()).min(logs.len());
        print_entries(&logs[..n], &cfg.time_format);
    }
    Ok(())
}

/// Print entries as a table, in the given order.
pub(crate) fn print_entries(entries: &[AttendanceEntry], time_format: &str) {
    let mut table = Table::new(vec![
        Column::new("TIME", 20),
        Column::new("NAME", 16),
        Column::new("TYPE", 4),
        Column::new("ID", 32),
    ]);

    for e in entries {
        table.add_row(vec![
            e.time_local(time_format),
            e.name.clone(),
            e.kind.et_as_str().to_string(),
            e.id.clone(),
        ]);
    }

    print!("{}", table.render());
}
