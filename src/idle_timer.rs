//! Inactivity tracking for auto-sleep

use embassy_time::{Duration, Instant};

/// Tracks the time of the last user activity.
///
/// An unarmed timer (never reset) never asks for sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleTimer {
    last_activity: Option<Instant>,
}

impl IdleTimer {
    pub const fn new() -> Self {
        Self {
            last_activity: None,
        }
    }

    /// Record activity at `now`
    pub fn reset(&mut self, now: Instant) {
        self.last_activity = Some(now);
    }

    pub const fn last_activity(&self) -> Option<Instant> {
        self.last_activity
    }

    /// Whether `timeout` has passed since the last activity
    pub fn should_sleep(&self, now: Instant, timeout: Duration) -> bool {
        match self.last_activity {
            None => false,
            Some(last) => now.saturating_duration_since(last) >= timeout,
        }
    }

    /// Time left before sleep, zero once it is due
    pub fn time_remaining(&self, now: Instant, timeout: Duration) -> Duration {
        match self.last_activity {
            None => timeout,
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                timeout.checked_sub(elapsed).unwrap_or(Duration::from_ticks(0))
            }
        }
    }
}
