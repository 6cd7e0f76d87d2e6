//! Periodic label refresh
//!
//! The loop is driven by the UI's own repaint scheduling: each tick writes
//! the label and returns how long to wait before the next one. Ticks land
//! on a fixed grid of `period`, so the time spent painting never stretches
//! the interval.

use std::time::Duration;

use crate::core::{format_remaining, TimerState};

/// Destination for the rendered label
pub trait LabelSink {
    /// False once the window showing the label has been torn down
    fn is_alive(&self) -> bool;

    fn set_label(&mut self, text: &str);
}

/// Label for `timer` at `now`.
///
/// Once a running countdown has expired the zero label blinks at 1 Hz: it
/// is shown on even wall-clock seconds and blank on odd ones.
pub fn label_at(timer: &TimerState, now: f64) -> String {
    if timer.is_expired(now) && !blink_visible(now) {
        return String::new();
    }
    format_remaining(timer.remaining(now))
}

fn blink_visible(now: f64) -> bool {
    now.floor().rem_euclid(2.0) == 0.0
}

pub struct RefreshLoop {
    period: Duration,
    stopped: bool,
}

impl RefreshLoop {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            stopped: false,
        }
    }

    #[cfg(test)]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Stop re-arming. Further ticks do nothing.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Refresh the label. Returns the delay until the next tick, or `None`
    /// once the loop has stopped or the sink is gone.
    pub fn tick<S: LabelSink>(
        &mut self,
        timer: &TimerState,
        now: f64,
        sink: &mut S,
    ) -> Option<Duration> {
        if self.stopped {
            return None;
        }
        if !sink.is_alive() {
            tracing::debug!("Label sink gone, refresh loop stopping");
            self.stopped = true;
            return None;
        }

        sink.set_label(&label_at(timer, now));
        Some(self.next_delay(now))
    }

    /// Time until the next multiple of `period`
    fn next_delay(&self, now: f64) -> Duration {
        let period = self.period.as_secs_f64();
        if period <= 0.0 || !now.is_finite() {
            return self.period;
        }
        let until_next = period - now.rem_euclid(period);
        if until_next <= 0.0 || until_next > period {
            self.period
        } else {
            Duration::from_secs_f64(until_next)
        }
    }
}
