//! Core countdown model
//!
//! Timer state, time formatting, the clock source and drag tracking. Nothing
//! in here touches the GUI or the tray, so all of it is unit tested directly.

use std::time::Duration;

mod clock;
mod drag;
mod format;
mod timer;

pub use clock::MonotonicClock;
pub use drag::DragController;
pub use format::format_remaining;
pub use timer::TimerState;

/// Span the clock restarts to on reset, in seconds
pub const INITIAL_DURATION_SECS: f64 = 3.0 * 60.0;

/// Interval between label refreshes
pub const REFRESH_PERIOD: Duration = Duration::from_millis(100);
