//! Display collaborators mounted under the root view.
//!
//! Each widget owns whatever internal state its display needs and exposes plain
//! methods to the application layer. Rendering lives in [`crate::ui`].
//!
//! # Modules
//!
//! - [`clock`]: Time formatting and greeting
//! - [`countdown`]: Countdown bound to a timer session identity
//! - [`pomodoro`]: Work/Break cycle with its own controls
//! - [`quote`]: Quote of the day
//! - [`music`]: Playlist panel and link recognition

pub mod clock;
pub mod countdown;
pub mod music;
pub mod pomodoro;
pub mod quote;

pub use clock::HourFormat;
pub use countdown::Countdown;
pub use music::{MusicPanel, Playlist};
pub use pomodoro::{Pomodoro, PomodoroPhase};
pub use quote::Quote;
