//! Countdown timer state
//!
//! All timestamps are seconds on the same clock (see [`MonotonicClock`]).
//! The caller always passes `now` in, which keeps every transition a pure
//! function of its inputs.
//!
//! [`MonotonicClock`]: super::MonotonicClock

use super::INITIAL_DURATION_SECS;

/// Where the authoritative remaining time lives
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Counting down towards `ends_at`
    Running { ends_at: f64 },
    /// Frozen with `remaining` seconds left
    Paused { remaining: f64 },
}

/// Countdown state: either running towards an end timestamp or paused
/// with a stored remaining value, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerState {
    phase: Phase,
}

impl TimerState {
    /// A paused timer holding the full countdown duration
    pub fn new() -> Self {
        Self {
            phase: Phase::Paused {
                remaining: INITIAL_DURATION_SECS,
            },
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// End timestamp while running
    #[cfg(test)]
    pub fn ends_at(&self) -> Option<f64> {
        match self.phase {
            Phase::Running { ends_at } => Some(ends_at),
            Phase::Paused { .. } => None,
        }
    }

    /// Seconds left at `now`. Not clamped: an expired running timer
    /// reports a negative value.
    pub fn remaining(&self, now: f64) -> f64 {
        match self.phase {
            Phase::Running { ends_at } => ends_at - now,
            Phase::Paused { remaining } => remaining,
        }
    }

    /// Running and past the end timestamp
    pub fn is_expired(&self, now: f64) -> bool {
        match self.phase {
            Phase::Running { ends_at } => now > ends_at,
            Phase::Paused { .. } => false,
        }
    }

    /// Restart the full countdown from `now`, discarding any paused value
    pub fn reset(&mut self, now: f64) {
        self.phase = Phase::Running {
            ends_at: now + INITIAL_DURATION_SECS,
        };
    }

    /// Pause a running timer or resume a paused one
    pub fn toggle_pause(&mut self, now: f64) {
        self.phase = match self.phase {
            Phase::Running { ends_at } => Phase::Paused {
                remaining: ends_at - now,
            },
            Phase::Paused { remaining } => Phase::Running {
                ends_at: now + remaining,
            },
        };
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_starts_paused_with_full_duration() {
        let timer = TimerState::new();
        assert!(!timer.is_running());
        assert_eq!(timer.ends_at(), None);
        assert_eq!(timer.remaining(12_345.0), INITIAL_DURATION_SECS);
    }

    #[test]
    fn test_reset_starts_full_countdown() {
        let mut timer = TimerState::new();
        let now = 1_700_000_000.25;
        timer.reset(now);

        assert!(timer.is_running());
        assert_eq!(timer.remaining(now), INITIAL_DURATION_SECS);
        assert_eq!(timer.ends_at(), Some(now + INITIAL_DURATION_SECS));
    }

    #[test]
    fn test_reset_discards_paused_value() {
        let mut timer = TimerState::new();
        timer.reset(100.0);
        timer.toggle_pause(150.0);
        assert!((timer.remaining(999.0) - (INITIAL_DURATION_SECS - 50.0)).abs() < EPSILON);

        timer.reset(200.0);
        assert!(timer.is_running());
        assert_eq!(timer.remaining(200.0), INITIAL_DURATION_SECS);
    }

    #[test]
    fn test_remaining_counts_down_while_running() {
        let mut timer = TimerState::new();
        timer.reset(10.0);
        assert!((timer.remaining(70.0) - (INITIAL_DURATION_SECS - 60.0)).abs() < EPSILON);
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let mut timer = TimerState::new();
        timer.reset(0.0);
        timer.toggle_pause(30.0);

        assert!(!timer.is_running());
        let frozen = timer.remaining(30.0);
        assert!((frozen - (INITIAL_DURATION_SECS - 30.0)).abs() < EPSILON);
        // Time passing does not change a paused timer
        assert_eq!(timer.remaining(500.0), frozen);
    }

    #[test]
    fn test_resume_continues_from_paused_value() {
        let mut timer = TimerState::new();
        timer.reset(0.0);
        timer.toggle_pause(30.0);
        timer.toggle_pause(1_000.0);

        assert!(timer.is_running());
        assert!((timer.remaining(1_000.0) - (INITIAL_DURATION_SECS - 30.0)).abs() < EPSILON);
        assert!((timer.remaining(1_010.0) - (INITIAL_DURATION_SECS - 40.0)).abs() < EPSILON);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let now = 1_700_000_123.456;

        let mut running = TimerState::new();
        running.reset(now - 42.0);
        let before = running.remaining(now);
        running.toggle_pause(now);
        running.toggle_pause(now);
        assert!(running.is_running());
        assert!((running.remaining(now) - before).abs() < 1e-6);

        let mut paused = TimerState::new();
        paused.toggle_pause(now);
        paused.toggle_pause(now);
        assert!(!paused.is_running());
        assert!((paused.remaining(now) - INITIAL_DURATION_SECS).abs() < 1e-6);
    }

    #[test]
    fn test_expiry() {
        let mut timer = TimerState::new();
        let now = 500.0;
        timer.reset(now);

        assert!(!timer.is_expired(now + INITIAL_DURATION_SECS));
        assert!(timer.is_expired(now + INITIAL_DURATION_SECS + 5.0));
        assert!(timer.remaining(now + INITIAL_DURATION_SECS + 5.0) < 0.0);
    }

    #[test]
    fn test_paused_timer_never_expires() {
        let mut timer = TimerState::new();
        timer.reset(0.0);
        timer.toggle_pause(INITIAL_DURATION_SECS + 10.0);

        assert!(timer.remaining(0.0) < 0.0);
        assert!(!timer.is_expired(1e12));
    }
}
