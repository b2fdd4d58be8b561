mod app;
mod config;
mod layout;
mod paths;
mod render;
mod store;
mod terminal;

use std::fs::{self, File};

use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};

use crate::app::{DemoApp, DemoError};
use crate::config::DemoConfig;
use crate::store::StateStore;

fn init_logging(config: &DemoConfig) -> Result<(), DemoError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    info!("Logging to {}", path.display());
    Ok(())
}

async fn run() -> Result<(), DemoError> {
    let config = DemoConfig::parse();
    init_logging(&config)?;

    let state_path = config
        .state_path
        .clone()
        .or_else(paths::state_file)
        .ok_or(DemoError::NoStatePath)?;
    let store = StateStore::new(state_path);

    DemoApp::new(config, store).run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
