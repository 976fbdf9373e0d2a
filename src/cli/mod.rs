//! Command-line interface

pub mod args;
pub mod router;

pub use args::{Cli, Commands, ReportKind};
pub use router::{execute_command, run_report};

/// Filter directive for a `-v` count
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
