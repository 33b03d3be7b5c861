//! # CLI Layer
//!
//! The CLI is **one possible UI client** for towerkit. It is the only place
//! that knows about stdin/stdout, colors, logging setup and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, in `setup.rs`
//! 2. **Context Setup**: logging, config directory, store capacity
//! 3. **Interaction**: the menu loop and input re-prompting (`menu.rs`, `prompt.rs`)
//! 4. **Output Formatting**: `CmdResult` to terminal text (`render.rs`)
//!
//! ## Testing Strategy
//!
//! The menu is generic over its reader and writer, so tests feed it a script
//! through `Cursor` and compare the captured output. Rendering functions return
//! strings and are tested directly. End-to-end runs of the binary live in
//! `tests/`.

mod menu;
mod prompt;
mod render;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use menu::{Console, FieldLimits};
use render::{render_config, render_messages};
use setup::{Cli, Commands};
use std::path::PathBuf;
use towerkit::api::{ConfigAction, TowerApi};
use towerkit::config::TowerConfig;
use towerkit::error::{Result, TowerError};
use towerkit::store::RecordStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TOWERKIT_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    debug!(dir = %config_dir.display(), "using config directory");

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(config_dir, key, value),
        Some(Commands::Menu) | None => handle_menu(config_dir, cli.capacity),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "towerkit", "towerkit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TowerError::Config("Could not determine config dir".to_string()))
}

fn handle_menu(config_dir: PathBuf, capacity: Option<usize>) -> Result<()> {
    let config = TowerConfig::load(&config_dir)?;
    let capacity = capacity.unwrap_or(config.capacity);
    debug!(capacity, "starting menu");

    let api = TowerApi::new(RecordStore::with_capacity(capacity), config_dir);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(
        api,
        FieldLimits::from(&config),
        stdin.lock(),
        stdout.lock(),
    );
    console.run()
}

fn handle_config(config_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let api = TowerApi::new(RecordStore::new(), config_dir);
    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
