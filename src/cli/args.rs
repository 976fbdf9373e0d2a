//! CLI argument structures

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Track student grades and report on them
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "gradebook - record student grades and compute reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file (default: ./gradebook.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the schema if needed and serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Keep all records in memory instead of SQLite
        #[arg(long, conflicts_with = "database")]
        memory: bool,
    },

    /// Create the database schema and exit
    #[command(name = "init-db")]
    InitDb {
        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Compute a report from the stored grades and print it as JSON
    Report {
        #[arg(value_enum)]
        kind: ReportKind,

        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Mean numeric grade per student
    Average,
    /// Best three students by average
    Top,
    /// Number of grades per letter bin
    Distribution,
}
