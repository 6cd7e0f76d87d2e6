//! Countdown Clock - a small always-on-top countdown window with a tray menu
//!
//! - Borderless window showing `M:SS`, dragged around with the mouse
//! - Tray icon with Reset Clock / Pause / Play / Exit
//! - `config` subcommands for inspecting the settings file

mod cli;
mod core;
mod error;
mod logging;
mod native_ui;
mod settings;
mod tray;

use clap::Parser;
use cli::{exit_codes, Cli, Commands};
use settings::Settings;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = logging::init(cli.verbose, cli.json_output, cli.log_level.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match cli.command {
        Some(Commands::Config(args)) => match cli::config::run(args, cli.config.as_deref()) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                exit_codes::CONFIG_ERROR
            }
        },
        Some(Commands::Run) | None => {
            let settings = Settings::load_or_default(cli.config.as_deref());
            match native_ui::run(settings) {
                Ok(()) => exit_codes::SUCCESS,
                Err(e) => {
                    tracing::error!("{}", e);
                    eprintln!("Error: {}", e);
                    e.exit_code()
                }
            }
        }
    }
}
