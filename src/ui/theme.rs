//! Color palettes and ANSI escape sequence generation.
//!
//! A [`Theme`] is one palette. The light/dark pair the user switches between is
//! held by [`crate::app::ThemeContext`]; this module only knows how to load a
//! palette and turn hex colors into escape sequences.
//!
//! # Built-in Palettes
//!
//! - `catppuccin-latte`: light (default light palette)
//! - `catppuccin-mocha`: dark (default dark palette)
//! - `catppuccin-frappe`: dark
//! - `catppuccin-macchiato`: dark
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! accent = "#cba6f7"
//! accent_alt = "#a6e3a1"
//! dialog_border = "#f5c2e7"
//! input_fg = "#cdd6f4"
//! input_bg = "#313244"
//! backdrop_start = "#f5c2e7"
//! backdrop_end = "#89b4fa"
//! background = "#000000"   # optional
//! ```

use crate::domain::{FlocusError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in light palette.
pub const DEFAULT_LIGHT: &str = "catppuccin-latte";

/// Name of the built-in dark palette.
pub const DEFAULT_DARK: &str = "catppuccin-mocha";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable palette name.
    pub name: String,
    /// Colors for every UI element.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header title and quote text.
    pub header_fg: String,

    /// Body text (greeting, labels).
    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Large digits and running indicators.
    pub accent: String,
    /// Break phase and finished countdown.
    pub accent_alt: String,

    /// Dialog and panel frame.
    pub dialog_border: String,
    /// Text inside input fields.
    pub input_fg: String,
    /// Input field background.
    pub input_bg: String,

    /// Left end of the pointer-tracked header tint.
    pub backdrop_start: String,
    /// Right end of the pointer-tracked header tint.
    pub backdrop_end: String,

    /// Solid header background used instead of the tint.
    #[serde(default)]
    pub background: Option<String>,
}

impl Theme {
    /// Loads a built-in palette by name, `None` if the name is unknown.
    ///
    /// ```
    /// use flocus::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-frappe").unwrap();
    /// assert_eq!(theme.name, "catppuccin-frappe");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FlocusError::Theme`] if the file cannot be read or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FlocusError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| FlocusError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// The built-in light palette.
    ///
    /// # Panics
    ///
    /// Panics if the embedded palette fails to parse, which the tests rule out.
    #[must_use]
    pub fn default_light() -> Self {
        Self::from_name(DEFAULT_LIGHT).expect("built-in light palette should always parse")
    }

    /// The built-in dark palette.
    ///
    /// # Panics
    ///
    /// Panics if the embedded palette fails to parse, which the tests rule out.
    #[must_use]
    pub fn default_dark() -> Self {
        Self::from_name(DEFAULT_DARK).expect("built-in dark palette should always parse")
    }

    /// Parses `#rrggbb` (with or without `#`). Malformed input yields white.
    pub(crate) fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Linear blend of two hex colors; `t` is clamped to `0.0..=1.0`.
    ///
    /// ```
    /// use flocus::Theme;
    ///
    /// assert_eq!(Theme::blend("#000000", "#ffffff", 0.0), "#000000");
    /// assert_eq!(Theme::blend("#000000", "#ffffff", 1.0), "#ffffff");
    /// assert_eq!(Theme::blend("#000000", "#ff0000", 0.5), "#800000");
    /// ```
    #[must_use]
    pub fn blend(from: &str, to: &str, t: f64) -> String {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1) = Self::hex_to_rgb(from);
        let (r2, g2, b2) = Self::hex_to_rgb(to);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };

        format!("#{:02x}{:02x}{:02x}", mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_palette_parses() {
        for name in [
            "catppuccin-latte",
            "catppuccin-mocha",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn only_dark_builtins_carry_a_background() {
        assert!(Theme::default_light().colors.background.is_none());
        assert_eq!(
            Theme::default_dark().colors.background.as_deref(),
            Some("#000000")
        );
    }

    #[test]
    fn loads_palette_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = include_str!("../../themes/catppuccin-frappe.toml")
            .replace("catppuccin-frappe", "my-frappe");
        file.write_all(toml.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "my-frappe");
        assert_eq!(theme.colors.accent, "#ca9ee6");
    }

    #[test]
    fn missing_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, FlocusError::Theme(_)));
    }

    #[test]
    fn malformed_toml_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nheader_fg = \"#fff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Theme error: failed to parse"));
    }

    #[test]
    fn escapes_use_truecolor() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("nonsense"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn blend_clamps_out_of_range_factors() {
        assert_eq!(Theme::blend("#102030", "#405060", -2.0), "#102030");
        assert_eq!(Theme::blend("#102030", "#405060", 7.0), "#405060");
    }
}
