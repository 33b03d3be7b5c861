use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "towerkit", bin_name = "towerkit", version)]
#[command(
    about = "Organize the rescue tower's components: sort them three ways and find the key part",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(
        long,
        global = true,
        env = "TOWERKIT_HOME",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub config_dir: Option<PathBuf>,

    /// Store capacity for this run (overrides the configured value)
    #[arg(long, global = true, value_name = "N", value_parser = parse_capacity, help_heading = "Options")]
    pub capacity: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (capacity, name-max-len, category-max-len)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("not a number: {}", s)),
    }
}
