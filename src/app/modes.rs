//! View mode and input focus types.
//!
//! [`ViewMode`] is the top-level screen the user picked (Clock, Timer,
//! Pomodoro). [`ModeController`] owns the current value. [`InputFocus`] decides
//! where key presses go and is derived from which overlay is open.
//!
//! # Example
//!
//! ```rust
//! use flocus::app::modes::{ModeController, ViewMode};
//!
//! let mut modes = ModeController::default();
//! assert_eq!(modes.current(), ViewMode::Clock);
//! assert!(modes.select(ViewMode::Timer));
//! assert!(!modes.select(ViewMode::Timer));
//! ```

/// Top-level screen shown in the body of the pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Wall clock with greeting.
    #[default]
    Clock,

    /// Countdown driven by the timer session.
    Timer,

    /// Self-contained Pomodoro cycle.
    Pomodoro,
}

impl ViewMode {
    /// Title shown in the body heading and footer.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Timer => "Timer",
            Self::Pomodoro => "Pomodoro",
        }
    }

    /// Mode reached by `Tab`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Clock => Self::Timer,
            Self::Timer => Self::Pomodoro,
            Self::Pomodoro => Self::Clock,
        }
    }
}

/// Holds the selected view mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeController {
    current: ViewMode,
}

impl ModeController {
    /// Currently selected mode.
    #[must_use]
    pub const fn current(&self) -> ViewMode {
        self.current
    }

    /// Selects `mode`. Returns `false` when it was already selected.
    pub fn select(&mut self, mode: ViewMode) -> bool {
        if self.current == mode {
            return false;
        }
        tracing::debug!(from = ?self.current, to = ?mode, "view mode selected");
        self.current = mode;
        true
    }
}

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Single-key commands.
    ///
    /// c/t/p/Tab (modes), s (start), r (reset), n (skip), d (theme),
    /// f (fullscreen), m (music), q (hide).
    Normal,

    /// Onboarding dialog name field.
    ///
    /// Printable keys type, Backspace deletes, Enter submits, Esc dismisses.
    Dialog,

    /// Music panel link field.
    ///
    /// Printable keys type, Backspace deletes, Enter adds the link, Esc closes.
    MusicPanel,
}
