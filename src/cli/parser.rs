use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBusBooker
/// CLI application to reserve seats on a 40-seat coach
#[derive(Parser)]
#[command(
    name = "rbusbooker",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive seat booking CLI for a 40-seat coach, with CSV/JSON/XLSX export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Show the coach layout and the list of valid seat numbers
    Layout,

    /// Start an interactive booking session (reads commands from stdin)
    Session {
        /// Export the booking log to FILE when the session ends
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Export format (default: `default_format` from the configuration)
        #[arg(long, value_enum, value_name = "FORMAT", requires = "export")]
        format: Option<ExportFormat>,

        /// Overwrite the export file without confirmation
        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },
}
