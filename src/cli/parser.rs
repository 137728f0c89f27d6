use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rKiosk
#[derive(Parser)]
#[command(
    name = "rkiosk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shared-device attendance kiosk: employees clock in/out, the owner manages the log",
    long_about = None
)]
pub struct Cli {
    /// Override store database path (useful for tests or a second kiosk)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the store database
    Init,

    /// First-time owner setup: binds this device to the kiosk
    Setup {
        #[arg(long, help = "Owner email")]
        email: String,

        #[arg(long, help = "Owner PIN (digits or a short text)")]
        pin: String,
    },

    /// Owner login to bind this device again (new device identity)
    Rebind {
        #[arg(long, help = "Owner email, must match the stored one")]
        email: String,

        #[arg(long, help = "Owner PIN, must match the stored one")]
        pin: String,
    },

    /// Clock in
    In {
        /// Employee name, as listed by `employees`
        name: String,
    },

    /// Clock out
    Out {
        /// Employee name, as listed by `employees`
        name: String,
    },

    /// Show the binding state and the latest entries
    Status,

    /// List attendance entries, newest first
    List {
        #[arg(long, short, help = "Show only the N most recent entries")]
        limit: Option<usize>,
    },

    /// Print the employee roster
    Employees,

    /// Owner authentication: shows owner email and bound device
    Admin {
        #[arg(long, help = "Owner PIN (asked interactively if omitted)")]
        pin: Option<String>,
    },

    /// Export the attendance log (owner PIN required)
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (default: attendance_YYYY-MM-DD.<format> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, help = "Owner PIN (asked interactively if omitted)")]
        pin: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every attendance entry (owner PIN and confirmation required)
    Clear {
        #[arg(long, help = "Owner PIN (asked interactively if omitted)")]
        pin: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Inspect or reset this device's identity
    Device {
        #[arg(long = "show", help = "Print the identity stored on this device")]
        show: bool,

        #[arg(
            long = "forget",
            help = "Remove this device's identity (the owner will have to rebind)"
        )]
        forget: bool,

        /// Skip the confirmation prompt (with --forget)
        #[arg(long, short = 'y', requires = "forget")]
        yes: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
