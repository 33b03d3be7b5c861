//! # Towerkit CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Running `towerkit` with no subcommand opens the interactive menu. Records
//! live in memory for the length of the session; only the configuration
//! (store capacity and field limits) is kept on disk.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
