//! Content Portal - announcements, news and documents in the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use portal::{initial_state, run_headless, StartupOptions};
use portal_app::config::{default_config_path, init_config, load_settings, Settings};
use portal_core::{RecordId, Section};
use tracing::info;

/// Content Portal - announcements, news and documents in the terminal
#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "A terminal portal for announcements, news and documents", long_about = None)]
struct Args {
    /// Initial section: comunicados, noticias, documentos or admin
    #[arg(long, value_name = "ID")]
    section: Option<Section>,

    /// Initial search query
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Open a news record in detail view (requires the noticias section)
    #[arg(long, value_name = "ID")]
    news: Option<RecordId>,

    /// Settings file (defaults to <config dir>/portal/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    color_eyre::install()?;

    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| eyre!("No config directory available"))?;
        if init_config(&path)? {
            eprintln!("Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    // Log to file, since the TUI owns stdout
    portal_core::logging::init()?;

    let settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };

    let options = StartupOptions {
        section: args.section,
        query: args.query,
        news: args.news,
    };
    let state = initial_state(settings, &options);

    let result = if args.headless {
        run_headless(&state)
    } else {
        portal_tui::run(state)
    };

    if result.is_err() {
        if let Ok(log_file) = portal_core::logging::get_current_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
    }
    result?;

    info!("Portal exiting");
    Ok(())
}
