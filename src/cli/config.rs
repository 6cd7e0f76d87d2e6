//! Config command implementation
//!
//! Utilities for validating and inspecting the settings file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::settings::Settings;
use crate::tray::load_icon_image;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the settings file path
    Path,
    /// Print the effective settings
    Dump {
        /// Output format: json or toml
        #[arg(short, long, default_value = "json", value_parser = ["json", "toml"])]
        format: String,
    },
    /// Validate the settings file and the icon it points at
    Validate,
    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the config command
pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Path => show_path(explicit),
        ConfigCommand::Dump { format } => {
            let settings = Settings::load_or_default(explicit);
            println!("{}", render(&settings, &format)?);
            Ok(())
        }
        ConfigCommand::Validate => validate(explicit),
        ConfigCommand::Init { force } => init(explicit, force),
    }
}

fn show_path(explicit: Option<&Path>) -> anyhow::Result<()> {
    let path = Settings::resolve_path(explicit)?;
    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("{}{}", path.display(), status);
    Ok(())
}

/// Serialize settings in the requested format
fn render(settings: &Settings, format: &str) -> anyhow::Result<String> {
    match format {
        "toml" => toml::to_string_pretty(settings).context("failed to render settings as TOML"),
        _ => serde_json::to_string_pretty(settings).context("failed to render settings as JSON"),
    }
}

fn init(explicit: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = Settings::resolve_path(explicit)?;
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default().save_to(&path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

fn validate(explicit: Option<&Path>) -> anyhow::Result<()> {
    let path = Settings::resolve_path(explicit)?;

    print!("Checking {}... ", path.display());
    let settings = if path.exists() {
        let settings = Settings::load_from(&path)?;
        let problems = settings.problems();
        if problems.is_empty() {
            println!("OK");
        } else {
            println!("WARNINGS");
            for problem in &problems {
                println!("  - {}", problem);
            }
        }
        settings.sanitized()
    } else {
        println!("NOT FOUND (using defaults)");
        Settings::default()
    };

    print!("Checking icon {}... ", settings.icon_path.display());
    match load_icon_image(&settings.icon_path) {
        Ok(icon) => {
            println!("OK ({}x{})", icon.width(), icon.height());
            Ok(())
        }
        Err(e) => {
            println!("INVALID");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let out = render(&Settings::default(), "json").unwrap();
        let parsed: Settings = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_render_toml() {
        let out = render(&Settings::default(), "toml").unwrap();
        assert!(out.contains("font_size = 72.0"));
        assert!(out.contains("padding = 20.0"));
        assert!(!out.contains("always_on_top"));
    }

    #[test]
    fn test_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CountdownClock").join("settings.json");

        init(Some(&path), false).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());

        // Existing files are left alone unless forced
        std::fs::write(&path, r#"{ "font_size": 30 }"#).unwrap();
        assert!(init(Some(&path), false).is_err());
        assert_eq!(Settings::load_from(&path).unwrap().font_size, 30.0);

        init(Some(&path), true).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_validate_rejects_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(validate(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_reports_missing_icon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            icon_path: dir.path().join("nope.png"),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert!(validate(Some(&path)).is_err());
    }
}
