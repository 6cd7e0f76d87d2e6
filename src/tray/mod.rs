//! System tray module for Countdown Clock
//!
//! The OS icon and its menu ([`TrayManager`]) live on the UI thread, except
//! on Linux where they need a GTK main loop of their own and are hosted on
//! a GTK thread instead. [`TraySurface`] names whichever applies. Menu
//! clicks are pumped on a dedicated thread ([`TrayController`]) and
//! forwarded to the UI as [`TrayCommand`]s.

pub mod controller;
#[cfg(target_os = "linux")]
pub mod gtk_host;
pub mod handle;
pub mod icon;
pub mod manager;

pub use controller::{TrayCommand, TrayController};
pub use handle::TrayHandle;
pub use icon::{load_icon_image, IconImage};
pub use manager::{tooltip_for, TrayManager};

#[cfg(target_os = "linux")]
pub use gtk_host::GtkTrayHost as TraySurface;
#[cfg(not(target_os = "linux"))]
pub use manager::TrayManager as TraySurface;
