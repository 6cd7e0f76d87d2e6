//! Lifetime of the tray surface
//!
//! Bundles the OS icon and the menu thread so the UI can tear both down
//! in one call, as many times as it likes.

use super::{TrayController, TraySurface};

pub struct TrayHandle {
    surface: Option<TraySurface>,
    controller: Option<TrayController>,
    stopped: bool,
}

impl TrayHandle {
    pub fn new(surface: Option<TraySurface>, controller: Option<TrayController>) -> Self {
        Self {
            surface,
            controller,
            stopped: false,
        }
    }

    #[cfg(test)]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn set_tooltip(&mut self, tooltip: &str) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_tooltip(tooltip);
        }
    }

    /// Stop the menu thread and remove the icon. Returns `true` only for
    /// the call that actually stopped something; later calls are no-ops.
    pub fn stop(&mut self) -> bool {
        if self.stopped {
            tracing::debug!("Tray already stopped");
            return false;
        }
        self.stopped = true;

        if let Some(mut controller) = self.controller.take() {
            controller.stop();
        }
        if let Some(surface) = self.surface.take() {
            surface.stop();
        }
        true
    }
}

impl Drop for TrayHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
