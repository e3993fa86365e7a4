//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, body, overlays and footer
//! - [`helpers`]: Cursor movement and text width utilities
//! - [`theme`]: Palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, DialogInfo, FooterInfo, HeaderInfo, MusicPanelInfo, TimerStatus, UIViewModel,
};
