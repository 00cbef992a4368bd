use clap::Parser;
use std::path::PathBuf;

use crate::level::SeverityLevel;

/// An interactive viewer that steps through log lines matching a severity level
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log file to open (prompted for interactively when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Severity level to filter by (prompted for interactively when omitted)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub level: Option<SeverityLevel>,

    /// Logging configuration file
    #[arg(long, default_value = "logging.toml")]
    pub log_config: PathBuf,

    /// Keep previous output on screen between steps
    #[arg(long)]
    pub no_clear: bool,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
