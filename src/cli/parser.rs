use clap::{Parser, Subcommand};

/// Command-line interface definition for kintai
/// CLI application to punch, list and fix attendance on the Jobcan timesheet
#[derive(Parser)]
#[command(
    name = "kintai",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance operations for the Jobcan web timesheet: punch in/out, list, and fix recorded times",
    long_about = None
)]
pub struct Cli {
    /// Override credentials file path (useful for tests or multiple accounts)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the service credentials (client ID, login ID, password, account type)
    Init,

    /// Punch in: record the start of today's work
    Start,

    /// Punch out: record the end of today's work
    End,

    /// Print this month's attendance report
    List,

    /// Show the recorded punches for a day and optionally fix one
    Show {
        /// Day to show, YYYYMMDD or YYYY-MM-DD (defaults to today)
        day: Option<String>,
    },
}
