//! Error types for Countdown Clock

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::exit_codes;

/// Errors that can stop the clock from starting or shutting down cleanly
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("Failed to load icon from {}: {source}", path.display())]
    IconLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid icon image: {0}")]
    BadIcon(#[from] tray_icon::BadIcon),

    #[error("Failed to create tray icon: {0}")]
    Tray(#[from] tray_icon::Error),

    #[error("Failed to build tray menu: {0}")]
    Menu(#[from] tray_icon::menu::Error),

    #[cfg(target_os = "linux")]
    #[error("Failed to start tray: {0}")]
    TrayHost(String),

    #[error("Failed to spawn tray thread: {0}")]
    Thread(#[source] io::Error),

    #[error("Could not determine settings path")]
    NoSettingsPath,

    #[error("Could not access settings at {}: {source}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings in {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("GUI error: {0}")]
    Gui(String),
}

impl ClockError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClockError::IconLoad { .. } | ClockError::BadIcon(_) => exit_codes::ASSET_MISSING,
            ClockError::NoSettingsPath
            | ClockError::SettingsIo { .. }
            | ClockError::SettingsParse { .. } => exit_codes::CONFIG_ERROR,
            ClockError::Tray(_) | ClockError::Menu(_) | ClockError::Thread(_) | ClockError::Gui(_) => {
                exit_codes::UNEXPECTED_FAILURE
            }
            #[cfg(target_os = "linux")]
            ClockError::TrayHost(_) => exit_codes::UNEXPECTED_FAILURE,
        }
    }
}
