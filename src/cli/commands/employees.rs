use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees = cmd {
        if cfg.employees.is_empty() {
            warning("The employee list is empty: add names under `employees` in the config file.");
            return Ok(());
        }

        header("Employees");
        for name in &cfg.employees {
            println!("  • {name}");
        }
    }
    Ok(())
}
