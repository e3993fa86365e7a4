//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! only way the application layer reaches Zellij: the runtime in `main.rs`
//! turns each one into a host call.
//!
//! # Example
//!
//! ```rust
//! use flocus::Action;
//!
//! let actions = vec![Action::ScheduleTick { seconds: 1.0 }, Action::ToggleFullscreen];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks Zellij to toggle fullscreen on the focused pane.
    ///
    /// The request may be ignored; the next `PaneUpdate` tells the truth.
    ToggleFullscreen,

    /// Arms the next heartbeat timeout.
    ScheduleTick {
        /// Delay in seconds.
        seconds: f64,
    },
}
