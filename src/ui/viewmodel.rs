//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready strings and flags only; the palette
//! is passed to the renderer separately.
//!
//! # Example
//!
//! ```rust
//! use flocus::ui::viewmodel::{BodyView, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: " Flocus ".to_string(),
//!         quote: "\"Well begun is half done.\" - Aristotle".to_string(),
//!         backdrop: None,
//!     },
//!     body: BodyView::Clock {
//!         time: "09:41".to_string(),
//!         meridiem: None,
//!         greeting: "Good morning".to_string(),
//!         date: "Saturday, 17 October".to_string(),
//!     },
//!     footer: FooterInfo { keybindings: "q: hide".to_string(), indicators: "[light]".to_string() },
//!     dialog: None,
//!     music_panel: None,
//! };
//! assert!(vm.dialog.is_none());
//! ```

use crate::widgets::PomodoroPhase;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar with quote and backdrop color.
    pub header: HeaderInfo,

    /// Content of the mounted display.
    pub body: BodyView,

    /// Key hints and status indicators.
    pub footer: FooterInfo,

    /// Onboarding dialog overlay, when open.
    pub dialog: Option<DialogInfo>,

    /// Music panel overlay, when open.
    pub music_panel: Option<MusicPanelInfo>,
}

/// Header information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Plugin title.
    pub title: String,

    /// Quote of the day, already formatted.
    pub quote: String,

    /// Header background as `#rrggbb`, `None` for the terminal default.
    pub backdrop: Option<String>,
}

/// Countdown state as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Not started, or reset.
    Ready,
    /// Counting down.
    Running,
    /// Reached zero.
    Finished,
}

/// What the body shows for the mounted display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// Wall clock face.
    Clock {
        /// `HH:MM` or `H:MM`.
        time: String,
        /// `AM`/`PM` for 12-hour clocks.
        meridiem: Option<&'static str>,
        /// Greeting line, personalized when a name was given.
        greeting: String,
        /// Long date line.
        date: String,
    },

    /// Countdown face.
    Timer {
        /// `MM:SS` or `H:MM:SS`.
        remaining: String,
        /// Ready, running or finished.
        status: TimerStatus,
    },

    /// Pomodoro face.
    Pomodoro {
        /// `MM:SS` left in the phase.
        remaining: String,
        /// Current phase.
        phase: PomodoroPhase,
        /// Whether the phase is counting down.
        running: bool,
        /// Work phases finished so far.
        completed: u32,
    },
}

/// Footer information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Key hints for the current focus.
    pub keybindings: String,

    /// Bracketed status flags, right-aligned.
    pub indicators: String,
}

/// Onboarding dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogInfo {
    /// Dialog heading.
    pub title: String,
    /// Prompt under the heading.
    pub description: String,
    /// Name field contents.
    pub name: String,
}

/// Music panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicPanelInfo {
    /// Link field contents.
    pub draft: String,
    /// Status line for the stored link.
    pub current: String,
}
