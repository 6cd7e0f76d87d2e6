//! System tray icon and menu
//!
//! Must be created on the thread that runs the platform's tray event loop;
//! events are read by the [`TrayController`](super::TrayController) thread.

use tray_icon::{
    menu::{Menu, MenuItem},
    Icon, TrayIcon, TrayIconBuilder,
};

use super::controller::TrayCommand;
use super::IconImage;
use crate::core::{format_remaining, TimerState};
use crate::error::ClockError;

/// Tooltip shown before the first refresh
pub const TOOLTIP: &str = "Countdown Clock";

/// Hover text describing the countdown at `now`
pub fn tooltip_for(timer: &TimerState, now: f64) -> String {
    let remaining = format_remaining(timer.remaining(now));
    if timer.is_expired(now) {
        format!("{} - Time's up", TOOLTIP)
    } else if timer.is_running() {
        format!("{} - {}", TOOLTIP, remaining)
    } else {
        format!("{} - {} (paused)", TOOLTIP, remaining)
    }
}

/// System tray manager
pub struct TrayManager {
    tray_icon: TrayIcon,
    tooltip: String,
}

impl TrayManager {
    /// Build the tray from a decoded icon image
    pub fn create(icon: &IconImage) -> Result<Self, ClockError> {
        Self::new(icon.to_tray_icon()?)
    }

    /// Create the tray icon with the Reset / Pause / Exit menu
    pub fn new(icon: Icon) -> Result<Self, ClockError> {
        let menu = Menu::new();
        for (id, label, _) in TrayCommand::MENU {
            menu.append(&MenuItem::with_id(id, label, true, None))?;
        }

        // Left click is the primary action (Reset Clock), so the menu only
        // opens on right click
        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .with_tooltip(TOOLTIP)
            .with_icon(icon)
            .build()?;

        tracing::info!("Tray icon created");

        Ok(Self {
            tray_icon,
            tooltip: TOOLTIP.to_string(),
        })
    }

    /// Update the hover text, skipping the OS call when nothing changed
    pub fn set_tooltip(&mut self, tooltip: &str) {
        if self.tooltip == tooltip {
            return;
        }
        if let Err(e) = self.tray_icon.set_tooltip(Some(tooltip)) {
            tracing::debug!("Failed to update tray tooltip: {}", e);
        }
        self.tooltip = tooltip.to_string();
    }

    /// Hide the icon. It is removed from the tray when dropped.
    pub fn stop(self) {
        if let Err(e) = self.tray_icon.set_visible(false) {
            tracing::debug!("Failed to hide tray icon: {}", e);
        }
        tracing::debug!("Tray icon removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::INITIAL_DURATION_SECS;

    #[test]
    fn test_tooltip_for() {
        let mut timer = TimerState::new();
        assert_eq!(tooltip_for(&timer, 0.0), "Countdown Clock - 3:00 (paused)");

        timer.reset(0.0);
        assert_eq!(tooltip_for(&timer, 59.5), "Countdown Clock - 2:00");
        assert_eq!(
            tooltip_for(&timer, INITIAL_DURATION_SECS + 1.0),
            "Countdown Clock - Time's up"
        );
    }
}
