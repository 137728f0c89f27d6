use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

use super::open_kiosk;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Use `rkiosk log --print` to show the internal log.");
            return Ok(());
        }

        let kiosk = open_kiosk(cfg)?;
        let rows = load_log(&kiosk.store().pool().conn)?;

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("DATE", 25),
            Column::new("OPERATION", 18),
            Column::new("TARGET", 24),
            Column::new("MESSAGE", 0),
        ]);
        for r in rows {
            table.add_row(vec![r.id.to_string(), r.date, r.operation, r.target, r.message]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
