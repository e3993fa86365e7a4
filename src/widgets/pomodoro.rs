//! Self-contained Pomodoro display.
//!
//! Alternates Work and Break phases. Each phase boundary stops the clock and
//! waits for the user to start the next phase; finishing a Work phase counts one
//! completed Pomodoro.

use std::time::Duration;

/// Default Work phase length.
pub const DEFAULT_WORK_MINUTES: u32 = 25;

/// Default Break phase length.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Pomodoro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroPhase {
    /// Focused work.
    Work,
    /// Short rest.
    Break,
}

impl PomodoroPhase {
    /// Label shown above the digits.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "FOCUS",
            Self::Break => "BREAK",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }
}

/// Pomodoro state owned by the mounted display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    work: Duration,
    rest: Duration,
    phase: PomodoroPhase,
    remaining: Duration,
    running: bool,
    completed: u32,
}

impl Pomodoro {
    /// Creates a stopped Pomodoro at the start of a Work phase.
    #[must_use]
    pub const fn new(work: Duration, rest: Duration) -> Self {
        Self {
            work,
            rest,
            phase: PomodoroPhase::Work,
            remaining: work,
            running: false,
            completed: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    /// Time left in the current phase.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whether the phase clock is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of Work phases run to completion.
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Starts a stopped phase or pauses a running one.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        tracing::debug!(phase = ?self.phase, running = self.running, "pomodoro toggled");
    }

    /// Stops and returns to a full Work phase. The completed count is kept.
    pub fn reset(&mut self) {
        self.phase = PomodoroPhase::Work;
        self.remaining = self.work;
        self.running = false;
    }

    /// Moves to the next phase without counting the current one.
    pub fn skip(&mut self) {
        self.advance(false);
    }

    /// Advances the running phase by `elapsed`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.advance(true);
        }
        true
    }

    fn advance(&mut self, finished: bool) {
        if finished && self.phase == PomodoroPhase::Work {
            self.completed = self.completed.saturating_add(1);
        }

        self.phase = self.phase.next();
        self.remaining = match self.phase {
            PomodoroPhase::Work => self.work,
            PomodoroPhase::Break => self.rest,
        };
        self.running = false;

        tracing::debug!(phase = ?self.phase, completed = self.completed, "pomodoro phase changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> Pomodoro {
        Pomodoro::new(Duration::from_secs(3), Duration::from_secs(2))
    }

    #[test]
    fn starts_stopped_in_full_work_phase() {
        let pomodoro = short();
        assert_eq!(pomodoro.phase(), PomodoroPhase::Work);
        assert_eq!(pomodoro.remaining(), Duration::from_secs(3));
        assert!(!pomodoro.is_running());
    }

    #[test]
    fn paused_pomodoro_ignores_ticks() {
        let mut pomodoro = short();
        assert!(!pomodoro.tick(Duration::from_secs(1)));
        assert_eq!(pomodoro.remaining(), Duration::from_secs(3));
    }

    #[test]
    fn finishing_work_counts_and_waits_in_break() {
        let mut pomodoro = short();
        pomodoro.toggle_running();

        for _ in 0..3 {
            assert!(pomodoro.tick(Duration::from_secs(1)));
        }

        assert_eq!(pomodoro.phase(), PomodoroPhase::Break);
        assert_eq!(pomodoro.remaining(), Duration::from_secs(2));
        assert_eq!(pomodoro.completed(), 1);
        assert!(!pomodoro.is_running());
    }

    #[test]
    fn finishing_break_returns_to_work_without_counting() {
        let mut pomodoro = short();
        pomodoro.skip();
        pomodoro.toggle_running();
        pomodoro.tick(Duration::from_secs(2));

        assert_eq!(pomodoro.phase(), PomodoroPhase::Work);
        assert_eq!(pomodoro.completed(), 0);
    }

    #[test]
    fn skip_does_not_count_work() {
        let mut pomodoro = short();
        pomodoro.toggle_running();
        pomodoro.skip();

        assert_eq!(pomodoro.phase(), PomodoroPhase::Break);
        assert_eq!(pomodoro.completed(), 0);
        assert!(!pomodoro.is_running());
    }

    #[test]
    fn reset_keeps_completed_count() {
        let mut pomodoro = short();
        pomodoro.toggle_running();
        pomodoro.tick(Duration::from_secs(3));
        pomodoro.toggle_running();
        pomodoro.tick(Duration::from_secs(1));

        pomodoro.reset();

        assert_eq!(pomodoro.phase(), PomodoroPhase::Work);
        assert_eq!(pomodoro.remaining(), Duration::from_secs(3));
        assert!(!pomodoro.is_running());
        assert_eq!(pomodoro.completed(), 1);
    }
}
