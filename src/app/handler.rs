//! Event handling and state transition logic.
//!
//! The plugin runtime translates Zellij input into [`Event`]s; [`handle_event`]
//! mutates [`AppState`] and returns whether to re-render plus the side effects
//! to run.
//!
//! # Event Types
//!
//! - **Mode**: `SelectMode`, `CycleMode`
//! - **Controls**: `Start`, `Reset`, `SkipPhase`, routed to the mounted display
//! - **Chrome**: `ToggleTheme`, `ToggleFullscreen`, `ToggleMusicPanel`, `CloseFocus`
//! - **Text input**: `Char`, `Backspace`, `Submit`, `Dismiss`, routed by focus
//! - **System**: `Tick`, `FullscreenChanged`, `PointerMoved`
//!
//! # Example
//!
//! ```rust
//! use flocus::app::{handle_event, AppState, Event, SessionDurations, ThemeContext, ViewMode};
//! use flocus::widgets::HourFormat;
//!
//! let mut state = AppState::new(ThemeContext::default(), SessionDurations::default(), HourFormat::TwentyFour);
//! let (render, actions) = handle_event(&mut state, &Event::SelectMode(ViewMode::Timer))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), flocus::FlocusError>(())
//! ```

use std::time::Duration;

use super::modes::{InputFocus, ViewMode};
use super::state::{MountedView, Pointer};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use zellij_tile::prelude::PaneManifest;

/// Heartbeat period in seconds.
pub const TICK_SECONDS: f64 = 1.0;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Selects a view mode directly.
    SelectMode(ViewMode),
    /// Selects the mode after the current one.
    CycleMode,

    /// Starts the timer session, or starts/pauses the Pomodoro.
    Start,
    /// Resets the timer session, or the Pomodoro phase.
    Reset,
    /// Skips to the next Pomodoro phase.
    SkipPhase,

    /// Flips light/dark.
    ToggleTheme,
    /// Requests a fullscreen toggle for the plugin pane.
    ToggleFullscreen,
    /// Fullscreen state reported by Zellij for the plugin pane.
    FullscreenChanged(bool),
    /// Shows or hides the music panel.
    ToggleMusicPanel,
    /// Hides the plugin pane.
    CloseFocus,

    /// Types a character into the focused field.
    Char(char),
    /// Deletes from the focused field.
    Backspace,
    /// Submits the focused field.
    Submit,
    /// Closes the focused overlay.
    Dismiss,

    /// Heartbeat with the time since the previous one.
    Tick {
        /// Elapsed wall time reported by the timeout.
        elapsed: Duration,
    },

    /// Mouse moved or clicked at a pane cell.
    PointerMoved {
        /// 0-based row.
        row: usize,
        /// 0-based column.
        col: usize,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane should be re-rendered.
///
/// # Errors
///
/// Reserved for fallible transitions; every current event is total.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectMode(mode) => Ok((state.select_mode(*mode), vec![])),
        Event::CycleMode => {
            let next = state.modes.current().next();
            Ok((state.select_mode(next), vec![]))
        }
        Event::Start => Ok((start(state), vec![])),
        Event::Reset => Ok((reset(state), vec![])),
        Event::SkipPhase => {
            let MountedView::Pomodoro(pomodoro) = &mut state.view else {
                return Ok((false, vec![]));
            };
            pomodoro.skip();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme.toggle();
            Ok((true, vec![]))
        }
        Event::ToggleFullscreen => {
            state.fullscreen = !state.fullscreen;
            tracing::debug!(fullscreen = state.fullscreen, "fullscreen toggle requested");
            Ok((true, vec![Action::ToggleFullscreen]))
        }
        Event::FullscreenChanged(is_fullscreen) => {
            Ok((state.sync_fullscreen(*is_fullscreen), vec![]))
        }
        Event::ToggleMusicPanel => {
            state.music.toggle();
            tracing::debug!(open = state.music.is_open(), "music panel toggled");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Char(c) => match state.input_focus() {
            InputFocus::Dialog => {
                state.dialog.push(*c);
                Ok((true, vec![]))
            }
            InputFocus::MusicPanel => {
                state.music.push(*c);
                Ok((true, vec![]))
            }
            InputFocus::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_focus() {
            InputFocus::Dialog => {
                state.dialog.pop();
                Ok((true, vec![]))
            }
            InputFocus::MusicPanel => {
                state.music.pop();
                Ok((true, vec![]))
            }
            InputFocus::Normal => Ok((false, vec![])),
        },
        Event::Submit => match state.input_focus() {
            InputFocus::Dialog => {
                state.dialog.submit();
                Ok((true, vec![]))
            }
            InputFocus::MusicPanel => {
                let link = state.music.take_draft();
                state.add_playlist(link);
                Ok((true, vec![]))
            }
            InputFocus::Normal => Ok((false, vec![])),
        },
        Event::Dismiss => match state.input_focus() {
            InputFocus::Dialog => {
                state.dialog.dismiss();
                Ok((true, vec![]))
            }
            InputFocus::MusicPanel => {
                state.music.close();
                Ok((true, vec![]))
            }
            InputFocus::Normal => Ok((false, vec![])),
        },
        Event::Tick { elapsed } => {
            let changed = state.tick(*elapsed);
            tracing::trace!(changed, elapsed_secs = elapsed.as_secs_f64(), "tick");
            // The clock face and the quote depend on wall time.
            Ok((true, vec![Action::ScheduleTick { seconds: TICK_SECONDS }]))
        }
        Event::PointerMoved { row, col } => {
            let pointer = Some(Pointer { row: *row, col: *col });
            if state.pointer == pointer {
                return Ok((false, vec![]));
            }
            state.pointer = pointer;
            Ok((true, vec![]))
        }
    }
}

fn start(state: &mut AppState) -> bool {
    match state.modes.current() {
        ViewMode::Timer => {
            state.start_timer();
            true
        }
        ViewMode::Pomodoro => match &mut state.view {
            MountedView::Pomodoro(pomodoro) => {
                pomodoro.toggle_running();
                true
            }
            _ => false,
        },
        ViewMode::Clock => false,
    }
}

fn reset(state: &mut AppState) -> bool {
    match state.modes.current() {
        ViewMode::Timer => {
            state.reset_timer();
            true
        }
        ViewMode::Pomodoro => match &mut state.view {
            MountedView::Pomodoro(pomodoro) => {
                pomodoro.reset();
                true
            }
            _ => false,
        },
        ViewMode::Clock => false,
    }
}

/// Reads this plugin's fullscreen flag out of a pane manifest.
///
/// Returns `None` when the manifest does not list the plugin pane `plugin_id`,
/// so manifests for other tabs leave the mirror untouched.
#[must_use]
pub fn fullscreen_from_manifest(manifest: &PaneManifest, plugin_id: u32) -> Option<Event> {
    let pane = manifest
        .panes
        .values()
        .flatten()
        .find(|pane| pane.is_plugin && pane.id == plugin_id)?;

    tracing::trace!(plugin_id, is_fullscreen = pane.is_fullscreen, "own pane found in manifest");
    Some(Event::FullscreenChanged(pane.is_fullscreen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{SessionDurations, ThemeContext, ThemeVariant};
    use zellij_tile::prelude::PaneInfo;
    use crate::widgets::{HourFormat, PomodoroPhase};

    fn state() -> AppState {
        AppState::new(
            ThemeContext::default(),
            SessionDurations::default(),
            HourFormat::TwentyFour,
        )
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn onboarding_then_timer_scenario() {
        let mut state = state();
        assert_eq!(state.modes.current(), ViewMode::Clock);
        assert!(state.dialog.is_open());

        send(&mut state, Event::SelectMode(ViewMode::Timer));
        assert_eq!(state.modes.current(), ViewMode::Timer);
        assert!(state.dialog.is_open());

        for c in "Rae".chars() {
            send(&mut state, Event::Char(c));
        }
        send(&mut state, Event::Submit);
        assert!(!state.dialog.is_open());
        assert_eq!(state.dialog.name(), "Rae");

        send(&mut state, Event::Start);
        assert!(state.timer.is_active());

        let key = state.timer.instance_key();
        send(&mut state, Event::Reset);
        assert!(!state.timer.is_active());
        assert_eq!(state.timer.instance_key(), key + 1);
    }

    #[test]
    fn reselecting_current_mode_skips_render() {
        let mut state = state();
        let (render, _) = send(&mut state, Event::SelectMode(ViewMode::Clock));
        assert!(!render);

        let (render, _) = send(&mut state, Event::CycleMode);
        assert!(render);
        assert_eq!(state.modes.current(), ViewMode::Timer);
    }

    #[test]
    fn start_after_reset_gives_fresh_identity() {
        let mut state = state();
        send(&mut state, Event::SelectMode(ViewMode::Timer));
        send(&mut state, Event::Start);
        let before = state.timer.instance_key();

        send(&mut state, Event::Reset);
        send(&mut state, Event::Start);

        assert!(state.timer.is_active());
        assert!(state.timer.instance_key() > before);
    }

    #[test]
    fn controls_are_ignored_in_clock_mode() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::Start), (false, vec![]));
        assert_eq!(send(&mut state, Event::Reset), (false, vec![]));
        assert_eq!(send(&mut state, Event::SkipPhase), (false, vec![]));
        assert!(!state.timer.is_active());
        assert_eq!(state.timer.instance_key(), 0);
    }

    #[test]
    fn pomodoro_controls_reach_mounted_pomodoro() {
        let mut state = state();
        send(&mut state, Event::SelectMode(ViewMode::Pomodoro));
        send(&mut state, Event::Start);
        send(&mut state, Event::Tick { elapsed: Duration::from_secs(3) });
        send(&mut state, Event::SkipPhase);

        match &state.view {
            MountedView::Pomodoro(pomodoro) => {
                assert_eq!(pomodoro.phase(), PomodoroPhase::Break);
                assert!(!pomodoro.is_running());
                assert_eq!(pomodoro.completed(), 0);
            }
            other => panic!("expected pomodoro view, got {other:?}"),
        }
        assert!(!state.timer.is_active());
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        let mut state = state();
        send(&mut state, Event::ToggleTheme);
        assert_eq!(state.theme.variant(), ThemeVariant::Dark);
        send(&mut state, Event::ToggleTheme);
        assert_eq!(state.theme, ThemeContext::default());
    }

    #[test]
    fn fullscreen_flips_then_follows_host() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::ToggleFullscreen);
        assert!(render);
        assert_eq!(actions, vec![Action::ToggleFullscreen]);
        assert!(state.fullscreen);

        // The host refused the request.
        let (render, _) = send(&mut state, Event::FullscreenChanged(false));
        assert!(render);
        assert!(!state.fullscreen);

        let (render, _) = send(&mut state, Event::FullscreenChanged(false));
        assert!(!render);
    }

    #[test]
    fn text_input_follows_focus() {
        let mut state = state();
        send(&mut state, Event::ToggleMusicPanel);
        send(&mut state, Event::Char('x'));
        send(&mut state, Event::Dismiss);
        assert_eq!(state.dialog.name(), "x");
        assert!(state.music.is_open());

        for c in "spotify:album:abc".chars() {
            send(&mut state, Event::Char(c));
        }
        send(&mut state, Event::Backspace);
        send(&mut state, Event::Submit);
        assert_eq!(state.playlist_link, "spotify:album:ab");
        assert_eq!(state.music.draft(), "");
        assert!(state.music.is_open());

        send(&mut state, Event::Dismiss);
        assert!(!state.music.is_open());
        assert_eq!(send(&mut state, Event::Char('q')), (false, vec![]));
    }

    #[test]
    fn tick_rearms_heartbeat() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::Tick { elapsed: Duration::from_secs(1) });
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTick { seconds: TICK_SECONDS }]);
    }

    #[test]
    fn pointer_updates_render_only_on_change() {
        let mut state = state();
        let (render, _) = send(&mut state, Event::PointerMoved { row: 2, col: 5 });
        assert!(render);
        let (render, _) = send(&mut state, Event::PointerMoved { row: 2, col: 5 });
        assert!(!render);
        assert_eq!(state.pointer, Some(Pointer { row: 2, col: 5 }));
    }

    #[test]
    fn close_focus_hides_without_render() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }

    fn pane(id: u32, is_plugin: bool, is_fullscreen: bool) -> PaneInfo {
        PaneInfo {
            id,
            is_plugin,
            is_fullscreen,
            ..PaneInfo::default()
        }
    }

    #[test]
    fn manifest_lookup_finds_own_plugin_pane() {
        let mut manifest = PaneManifest::default();
        manifest.panes.insert(0, vec![pane(7, false, true), pane(3, true, false)]);
        manifest.panes.insert(1, vec![pane(7, true, true)]);

        assert_eq!(
            fullscreen_from_manifest(&manifest, 7),
            Some(Event::FullscreenChanged(true))
        );
        assert_eq!(
            fullscreen_from_manifest(&manifest, 3),
            Some(Event::FullscreenChanged(false))
        );
        assert_eq!(fullscreen_from_manifest(&manifest, 9), None);
    }

    #[test]
    fn external_fullscreen_exit_clears_mirror() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleFullscreen).unwrap();
        assert!(state.fullscreen);

        let mut manifest = PaneManifest::default();
        manifest.panes.insert(0, vec![pane(4, true, false)]);
        let event = fullscreen_from_manifest(&manifest, 4).unwrap();

        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert!(!state.fullscreen);
    }
}
