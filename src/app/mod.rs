//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/widget layers.
//!
//! # Architecture
//!
//! ```text
//! Zellij Input → Events → Event Handler → State Mutations → Actions → Host Calls
//!                               ↑                                       │
//!                               └────────── Tick / PaneUpdate ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`context`]: Light/dark theme context injected into the state
//! - [`dialog`]: Onboarding name dialog
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: View mode and input focus types
//! - [`state`]: Root state and view model computation
//!
//! # Example
//!
//! ```rust
//! use flocus::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(Default::default(), Default::default(), Default::default());
//! let (_, actions) = handle_event(&mut state, &Event::ToggleTheme)?;
//! assert!(actions.is_empty());
//! # Ok::<(), flocus::FlocusError>(())
//! ```

pub mod actions;
pub mod context;
pub mod dialog;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use context::{ThemeContext, ThemeVariant};
pub use dialog::OnboardingDialog;
pub use handler::{fullscreen_from_manifest, handle_event, Event};
pub use modes::{InputFocus, ModeController, ViewMode};
pub use state::{AppState, MountedView, Pointer, SessionDurations};
