//! CLI module - command-line interface
//!
//! - `countdown-clock` - launch the clock window (default)
//! - `countdown-clock config` - inspect and validate the settings file

pub mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const ASSET_MISSING: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
}

/// Version string including build metadata from `build.rs`
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// Countdown Clock - always-on-top desktop countdown
///
/// Runs the clock window when no subcommand is given. Control the clock
/// from its tray icon: Reset Clock, Pause / Play, Exit.
#[derive(Parser, Debug)]
#[command(name = "countdown-clock")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit machine-readable logs (JSON) to stderr
    #[arg(long = "json-output", global = true)]
    pub json_output: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", global = true, value_parser = ["trace", "verbose", "debug", "info", "warning", "warn", "error", "critical"])]
    pub log_level: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true, env = "COUNTDOWN_CLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the clock window (default command)
    Run,

    /// Inspect or validate the settings file
    Config(config::ConfigArgs),
}
