//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which points at the cwd
//! Zellij was started from (typically the user's home directory).

use std::path::PathBuf;

/// Returns the Flocus data directory, where the trace file lives.
///
/// ```
/// use flocus::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/flocus"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("flocus")
}

/// Maps a `~`-prefixed host path into the sandbox (`~/x` → `/host/x`).
///
/// Used for the `theme_file` option.
///
/// ```
/// use flocus::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/dusk.toml"), "/etc/dusk.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
