//! Error types for the Flocus plugin.
//!
//! This module defines the centralized error type [`FlocusError`] and a type alias
//! [`Result`] used throughout the plugin. None of these errors are fatal: callers
//! log them and fall back to defaults.

use thiserror::Error;

/// The main error type for Flocus plugin operations.
///
/// Every fallible edge of the plugin (theme files, configuration values, playlist
/// links, trace file I/O) reports through this enum.
///
/// # Examples
///
/// ```
/// use flocus::FlocusError;
///
/// let err = FlocusError::Config("work_minutes must be positive".to_string());
/// assert_eq!(err.to_string(), "Configuration error: work_minutes must be positive");
/// ```
#[derive(Debug, Error)]
pub enum FlocusError {
    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML does not match the
    /// palette layout.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    ///
    /// The string names the offending key and the reason.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A music playlist link was not recognized.
    #[error("Playlist error: {0}")]
    Playlist(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Flocus operations.
pub type Result<T> = std::result::Result<T, FlocusError>;
