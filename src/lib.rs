//! Flocus: a Zellij plugin for keeping time and focus.
//!
//! Flocus shows one of three displays in a single pane:
//! - A clock with a personalized, time-of-day greeting
//! - A countdown timer that can be started and reset
//! - A Pomodoro cycle with Work and Break phases
//!
//! Around them sit a light/dark theme toggle with a pointer-tracked header
//! tint, a quote of the day, pane fullscreen mirroring, an onboarding dialog
//! that asks for the user's name and a music panel that recognizes Spotify
//! playlist links.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, mode selection, dialog, theme    │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Widgets       │
//! │ (ui/)         │                     │ (widgets/)    │
//! │ - Rendering   │                     │ - Clock       │
//! │ - Theming     │                     │ - Countdown   │
//! │ - Components  │                     │ - Pomodoro    │
//! └───────────────┘                     └───────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types, timer session (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/flocus.wasm" {
//!         timer_minutes "15"
//!         work_minutes "50"
//!         break_minutes "10"
//!         dark_theme "catppuccin-frappe"
//!         hour_format "12"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use flocus::{handle_event, initialize, Config, Event, ViewMode};
//!
//! let config = Config::from_zellij(&BTreeMap::new());
//! let mut state = initialize(&config);
//!
//! for event in [Event::Submit, Event::SelectMode(ViewMode::Timer), Event::Start] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.timer.is_active());
//! # Ok::<(), flocus::FlocusError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod widgets;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ViewMode};
pub use domain::{FlocusError, Result, TimerSession};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use app::{SessionDurations, ThemeContext, ThemeVariant};
use widgets::pomodoro::{DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES};
use widgets::HourFormat;

/// Default countdown length in minutes.
pub const DEFAULT_TIMER_MINUTES: u32 = 10;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Countdown starting duration. Default: 10
    pub timer_minutes: u32,

    /// Pomodoro Work phase. Default: 25
    pub work_minutes: u32,

    /// Pomodoro Break phase. Default: 5
    pub break_minutes: u32,

    /// Built-in palette for light mode. Default: `catppuccin-latte`
    pub light_theme: Option<String>,

    /// Built-in palette for dark mode. Default: `catppuccin-mocha`
    pub dark_theme: Option<String>,

    /// TOML palette file replacing the dark palette. `~` means the host home.
    ///
    /// Takes precedence over `dark_theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Start in dark mode.
    pub start_dark: bool,

    /// Clock face format.
    pub hour_format: HourFormat,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer_minutes: DEFAULT_TIMER_MINUTES,
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            light_theme: None,
            dark_theme: None,
            theme_file: None,
            start_dark: false,
            hour_format: HourFormat::default(),
            trace_level: None,
        }
    }
}

/// Parses one option. `Ok(None)` when the key is absent.
fn parse_option<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    config
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| FlocusError::Config(format!("invalid value {raw:?} for {key}")))
        })
        .transpose()
}

/// Parses a minutes option, which must be positive.
fn parse_minutes(config: &BTreeMap<String, String>, key: &str) -> Result<Option<u32>> {
    match parse_option::<u32>(config, key)? {
        Some(0) => Err(FlocusError::Config(format!("{key} must be at least 1"))),
        other => Ok(other),
    }
}

/// Falls back to `default` when `parsed` is an error, logging why.
fn or_default<T>(parsed: Result<Option<T>>, default: T) -> T {
    match parsed {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring configuration value");
            default
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Each key falls back to its default independently when missing or
    /// malformed.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use flocus::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("timer_minutes".to_string(), "15".to_string());
    /// map.insert("work_minutes".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.timer_minutes, 15);
    /// assert_eq!(config.work_minutes, 25);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let hour_format = config.get("hour_format").map_or(defaults.hour_format, |raw| {
            HourFormat::parse(raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "hour_format must be 12 or 24, using 24");
                defaults.hour_format
            })
        });

        Self {
            timer_minutes: or_default(parse_minutes(config, "timer_minutes"), defaults.timer_minutes),
            work_minutes: or_default(parse_minutes(config, "work_minutes"), defaults.work_minutes),
            break_minutes: or_default(parse_minutes(config, "break_minutes"), defaults.break_minutes),
            light_theme: config.get("light_theme").cloned(),
            dark_theme: config.get("dark_theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            start_dark: or_default(parse_option(config, "start_dark"), defaults.start_dark),
            hour_format,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Countdown and Pomodoro lengths.
    #[must_use]
    pub fn durations(&self) -> SessionDurations {
        let minutes = |m: u32| Duration::from_secs(u64::from(m) * 60);
        SessionDurations {
            timer: minutes(self.timer_minutes),
            work: minutes(self.work_minutes),
            rest: minutes(self.break_minutes),
        }
    }
}

/// Loads a built-in palette by name, or `fallback` when unknown.
fn named_theme(name: Option<&String>, fallback: fn() -> Theme) -> Theme {
    name.map_or_else(fallback, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            fallback()
        })
    })
}

/// Initializes the plugin state from configuration.
///
/// The returned state is in Clock mode with the onboarding dialog open.
///
/// ```rust
/// use flocus::{initialize, Config, ViewMode};
///
/// let state = initialize(&Config { start_dark: true, ..Config::default() });
/// assert_eq!(state.theme.palette().name, "catppuccin-mocha");
/// assert_eq!(state.modes.current(), ViewMode::Clock);
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing flocus plugin");

    let light = named_theme(config.light_theme.as_ref(), Theme::default_light);

    let dark = config.theme_file.as_ref().map_or_else(
        || named_theme(config.dark_theme.as_ref(), Theme::default_dark),
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                named_theme(config.dark_theme.as_ref(), Theme::default_dark)
            })
        },
    );

    let variant = if config.start_dark {
        ThemeVariant::Dark
    } else {
        ThemeVariant::Light
    };

    AppState::new(
        ThemeContext::new(variant, light, dark),
        config.durations(),
        config.hour_format,
    )
}
