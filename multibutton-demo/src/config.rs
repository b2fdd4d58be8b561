//! Command-line configuration for the demo host.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

const DEFAULT_LABELS: [&str; 3] = ["Left", "Center", "Right"];

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("invalid log level: {value}"))
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "multibutton-demo")]
#[command(about = "A row of exclusive toggles that remembers its selection", long_about = None)]
pub struct DemoConfig {
    /// Labels for the toggle row, left to right
    #[arg(default_values = DEFAULT_LABELS)]
    pub labels: Vec<String>,

    /// File holding the saved selection (defaults to the platform data dir)
    #[arg(long = "state")]
    pub state_path: Option<PathBuf>,

    /// Log level written to the log file
    #[arg(long, default_value = "debug", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Ignore any saved selection on startup
    #[arg(long)]
    pub reset: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            state_path: None,
            log_level: LevelFilter::Debug,
            reset: false,
        }
    }
}
