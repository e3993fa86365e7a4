//! Timer session lifecycle.
//!
//! A [`TimerSession`] tracks whether the countdown is running and an instance
//! key that identifies the countdown display currently bound to it. Resetting
//! bumps the key, which forces the display to be rebuilt from its configured
//! starting duration instead of resuming.
//!
//! ```text
//!            start()
//!  Inactive ─────────► Active
//!     ▲  │               │
//!     │  └── reset() ──┐ │ reset()
//!     └────────────────┴─┘   (instance_key += 1)
//! ```
//!
//! There is no pause and no terminal state; a session is reusable forever.

/// Running flag plus identity counter for the countdown display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSession {
    active: bool,
    instance_key: u64,
}

impl TimerSession {
    /// Creates an inactive session with instance key 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            instance_key: 0,
        }
    }

    /// Marks the session as running. Calling it while active is a no-op.
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stops the session and moves it to a fresh identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use flocus::domain::TimerSession;
    ///
    /// let mut session = TimerSession::new();
    /// session.start();
    /// session.reset();
    /// assert!(!session.is_active());
    /// assert_eq!(session.instance_key(), 1);
    /// ```
    pub fn reset(&mut self) {
        self.active = false;
        self.instance_key = self.instance_key.saturating_add(1);
    }

    /// Whether the countdown should be running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Identity of the countdown display bound to this session.
    #[must_use]
    pub const fn instance_key(&self) -> u64 {
        self.instance_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_with_key_zero() {
        let session = TimerSession::new();
        assert!(!session.is_active());
        assert_eq!(session.instance_key(), 0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut session = TimerSession::new();
        session.start();
        session.start();
        assert!(session.is_active());
        assert_eq!(session.instance_key(), 0);
    }

    #[test]
    fn reset_always_stops_and_bumps_key_by_one() {
        let mut session = TimerSession::new();
        session.reset();
        assert!(!session.is_active());
        assert_eq!(session.instance_key(), 1);

        session.start();
        session.reset();
        assert!(!session.is_active());
        assert_eq!(session.instance_key(), 2);
    }

    #[test]
    fn start_after_reset_runs_under_a_newer_key() {
        let mut session = TimerSession::new();
        session.start();
        let before = session.instance_key();

        session.reset();
        session.start();

        assert!(session.is_active());
        assert!(session.instance_key() > before);
    }

    #[test]
    fn key_never_decreases_over_mixed_operations() {
        let mut session = TimerSession::new();
        let mut last = session.instance_key();
        let mut resets = 0;

        for step in 0..20 {
            if step % 3 == 0 {
                session.reset();
                resets += 1;
            } else {
                session.start();
            }
            assert!(session.instance_key() >= last);
            last = session.instance_key();
        }

        assert_eq!(session.instance_key(), resets);
    }
}
