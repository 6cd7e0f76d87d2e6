//! Clock source for the countdown

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Monotonic seconds, offset so the integer part follows wall-clock seconds.
///
/// Elapsed time comes from [`Instant`] so system clock adjustments never
/// move a running countdown. The offset only matters for the blink phase,
/// which alternates on whole wall-clock seconds.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
    origin_epoch_secs: f64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        let origin_epoch_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self {
            origin: Instant::now(),
            origin_epoch_secs,
        }
    }

    /// Current time in seconds
    pub fn now(&self) -> f64 {
        self.origin_epoch_secs + self.origin.elapsed().as_secs_f64()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_now_tracks_wall_clock() {
        let clock = MonotonicClock::new();
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64();
        assert!((clock.now() - wall).abs() < 1.0);
    }
}
