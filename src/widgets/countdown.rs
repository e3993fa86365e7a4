//! Countdown display bound to a [`TimerSession`](crate::domain::TimerSession).
//!
//! The display is created with the session's instance key and its configured
//! starting duration. It never resumes across keys: when the session is reset,
//! the owner drops this value and builds a new one under the new key.

use std::time::Duration;

/// Remaining time for one countdown identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    key: u64,
    total: Duration,
    remaining: Duration,
}

impl Countdown {
    /// Creates a full countdown for the given identity.
    #[must_use]
    pub const fn new(key: u64, total: Duration) -> Self {
        Self {
            key,
            total,
            remaining: total,
        }
    }

    /// Identity this display was mounted under.
    #[must_use]
    pub const fn key(&self) -> u64 {
        self.key
    }

    /// Time left on the countdown.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Configured starting duration.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Whether the countdown has reached zero.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Advances the countdown by `elapsed` when `active`.
    ///
    /// Returns `true` if the remaining time changed.
    pub fn tick(&mut self, elapsed: Duration, active: bool) -> bool {
        if !active || self.is_finished() {
            return false;
        }

        let before = self.remaining;
        self.remaining = self.remaining.saturating_sub(elapsed);

        if self.is_finished() {
            tracing::debug!(key = self.key, "countdown finished");
        }

        self.remaining != before
    }
}

/// Formats a duration as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// Partial seconds round up so a running countdown never shows `00:00` early.
///
/// ```
/// use std::time::Duration;
/// use flocus::widgets::countdown::format_remaining;
///
/// assert_eq!(format_remaining(Duration::from_secs(605)), "10:05");
/// assert_eq!(format_remaining(Duration::from_millis(400)), "00:01");
/// assert_eq!(format_remaining(Duration::from_secs(3_725)), "1:02:05");
/// ```
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let mut secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        secs += 1;
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
