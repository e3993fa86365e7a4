//! Domain layer for the Flocus plugin.
//!
//! Core types that do not depend on Zellij or on rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`session`]: Timer session lifecycle (start / reset with identity bump)
//!
//! # Examples
//!
//! ```
//! use flocus::domain::{Result, TimerSession};
//!
//! fn started() -> Result<TimerSession> {
//!     let mut session = TimerSession::new();
//!     session.start();
//!     Ok(session)
//! }
//! # assert!(started().unwrap().is_active());
//! ```

pub mod error;
pub mod session;

pub use error::{FlocusError, Result};
pub use session::TimerSession;
