//! iprefs - Terminal preferences pane for external editors and shells
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use iprefs_app::config::{default_settings_path, init_settings_file};
use iprefs_app::{headless, PreferencesStore};
use iprefs_core::prelude::*;
use iprefs_core::{logging, Platform};

/// Choose the external editor, custom editors and shell
#[derive(Parser, Debug)]
#[command(name = "iprefs")]
#[command(about = "Integrations preferences: external editor, custom editors and shell", long_about = None)]
struct Args {
    /// Settings file to read and update
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Label style: mac or other (defaults to the settings file, then the host)
    #[arg(long, value_name = "PLATFORM")]
    platform: Option<Platform>,

    /// Reconcile once and print the selections as JSON (no TUI)
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let path = match args.config {
        Some(path) => path,
        None => default_settings_path()?,
    };
    info!("Settings file: {}", path.display());

    if init_settings_file(&path)? {
        eprintln!("Created {}", path.display());
    }

    let mut store = PreferencesStore::open(&path);
    let platform = args.platform.unwrap_or_else(|| store.platform());

    let result = if args.json {
        let snapshot = headless::run(&mut store, platform);
        snapshot.to_json().map(|json| println!("{json}"))
    } else {
        iprefs_tui::run(store, platform).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("iprefs exiting");
    result
}
