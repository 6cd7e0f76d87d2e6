//! Settings management for Countdown Clock
//!
//! Handles the optional settings file:
//! - Label font size and padding
//! - Tray icon image path
//!
//! The countdown duration and refresh period are compile-time constants,
//! not settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ClockError;

/// Icon loaded for the tray when the settings don't name one
pub const DEFAULT_ICON_PATH: &str = "clock.png";

/// Label font size in points
pub const DEFAULT_FONT_SIZE: f32 = 72.0;

/// Space around the label in points
pub const DEFAULT_PADDING: f32 = 20.0;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label font size in points
    pub font_size: f32,

    /// Padding around the label in points
    pub padding: f32,

    /// Image used for the tray and window icon
    pub icon_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            padding: DEFAULT_PADDING,
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
        }
    }
}

impl Settings {
    /// Get the default settings file path
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("CountdownClock").join("settings.json"))
    }

    /// Resolve an explicit override or fall back to the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ClockError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::settings_path().ok_or(ClockError::NoSettingsPath),
        }
    }

    /// Read and parse a settings file
    pub fn load_from(path: &Path) -> Result<Self, ClockError> {
        let content = std::fs::read_to_string(path).map_err(|source| ClockError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ClockError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// broken. Problems are logged rather than returned.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match Self::resolve_path(explicit) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{}, using default settings", e);
                return Self::default();
            }
        };

        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                for problem in settings.problems() {
                    tracing::warn!("settings: {}", problem);
                }
                settings.sanitized()
            }
            Err(e) => {
                tracing::warn!("{}, using default settings", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ClockError> {
        let io_err = |source| ClockError::SettingsIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| ClockError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }

    /// Human-readable descriptions of values that can't be used as-is
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            problems.push(format!(
                "font_size must be a positive number (got {}), default {} will be used",
                self.font_size, DEFAULT_FONT_SIZE
            ));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            problems.push(format!(
                "padding must not be negative (got {}), default {} will be used",
                self.padding, DEFAULT_PADDING
            ));
        }
        if self.icon_path.as_os_str().is_empty() {
            problems.push(format!(
                "icon_path is empty, default {} will be used",
                DEFAULT_ICON_PATH
            ));
        }
        problems
    }

    /// Replace unusable values with their defaults
    pub fn sanitized(mut self) -> Self {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            self.padding = DEFAULT_PADDING;
        }
        if self.icon_path.as_os_str().is_empty() {
            self.icon_path = PathBuf::from(DEFAULT_ICON_PATH);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, 72.0);
        assert_eq!(settings.padding, 20.0);
        assert_eq!(settings.icon_path, PathBuf::from(DEFAULT_ICON_PATH));
        assert!(settings.problems().is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "font_size": 48 }"#).unwrap();
        assert_eq!(settings.font_size, 48.0);
        assert_eq!(settings.padding, DEFAULT_PADDING);
    }

    #[test]
    fn test_window_placement_keys_are_ignored() {
        // The window is always on top; older files may still carry the key
        let settings: Settings =
            serde_json::from_str(r#"{ "padding": 4, "always_on_top": false }"#).unwrap();
        assert_eq!(settings.padding, 4.0);
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            font_size: 40.0,
            padding: 8.0,
            icon_path: PathBuf::from("icons/alarm.png"),
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
        assert_eq!(Settings::load_or_default(Some(&path)), settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(
            Settings::load_from(&path),
            Err(ClockError::SettingsIo { .. })
        ));
        assert_eq!(Settings::load_or_default(Some(&path)), Settings::default());
    }

    #[test]
    fn test_broken_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ClockError::SettingsParse { .. })
        ));
        assert_eq!(Settings::load_or_default(Some(&path)), Settings::default());
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let settings = Settings {
            font_size: -3.0,
            padding: f32::NAN,
            icon_path: PathBuf::new(),
        };
        assert_eq!(settings.problems().len(), 3);

        let fixed = settings.sanitized();
        assert_eq!(fixed, Settings::default());
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/clock-settings.json");
        assert_eq!(Settings::resolve_path(Some(&explicit)).unwrap(), explicit);
    }
}
