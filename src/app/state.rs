//! Root application state and view model computation.
//!
//! [`AppState`] is the root view: it composes the theme context, the mode
//! controller, the timer session and the onboarding dialog, and owns the
//! ephemeral flags (fullscreen mirror, music panel, pointer position).
//!
//! # Mounted View
//!
//! Exactly one display is mounted at a time, matching the selected mode. The
//! Timer display is mounted under the timer session's instance key; when the
//! key changes the display is rebuilt from scratch. Switching modes drops the
//! old display, so its countdown progress is gone, while the timer session
//! itself (`active`, `instance_key`) is untouched.
//!
//! ```text
//!             ┌──────────────────── AppState ─────────────────────┐
//!             │ ThemeContext  ModeController  TimerSession  Dialog │
//!             │        │             │              │              │
//!             │        │             ▼              ▼              │
//!             │        │       MountedView::{Clock, Timer(key), Pomodoro}
//!             └────────┼──────────────────────────────────────────┘
//!                      ▼
//!                 UIViewModel ──► ui::render
//! ```

use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};

use super::context::{ThemeContext, ThemeVariant};
use super::dialog::OnboardingDialog;
use super::modes::{InputFocus, ModeController, ViewMode};
use crate::domain::TimerSession;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, DialogInfo, FooterInfo, HeaderInfo, MusicPanelInfo, TimerStatus, UIViewModel,
};
use crate::widgets::{clock, countdown, quote, Countdown, HourFormat, MusicPanel, Playlist, Pomodoro};

/// Configured lengths for the countdown and the Pomodoro phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDurations {
    /// Countdown starting duration.
    pub timer: Duration,
    /// Pomodoro Work phase.
    pub work: Duration,
    /// Pomodoro Break phase.
    pub rest: Duration,
}

impl Default for SessionDurations {
    fn default() -> Self {
        Self {
            timer: Duration::from_secs(10 * 60),
            work: Duration::from_secs(u64::from(crate::widgets::pomodoro::DEFAULT_WORK_MINUTES) * 60),
            rest: Duration::from_secs(u64::from(crate::widgets::pomodoro::DEFAULT_BREAK_MINUTES) * 60),
        }
    }
}

/// Last reported mouse position, in pane cells (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    /// Row from the top of the pane.
    pub row: usize,
    /// Column from the left of the pane.
    pub col: usize,
}

/// The display currently mounted in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountedView {
    /// Clock has no internal state; it reads the time at render.
    Clock,
    /// Countdown mounted under a timer session key.
    Timer(Countdown),
    /// Pomodoro with its own controls.
    Pomodoro(Pomodoro),
}

/// Root view state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Selected view mode.
    pub modes: ModeController,

    /// Running flag and identity for the countdown.
    ///
    /// Owned independently of `modes`: leaving Timer mode does not stop it.
    pub timer: TimerSession,

    /// Name capture dialog, open at startup.
    pub dialog: OnboardingDialog,

    /// Active palette pair, injected at construction.
    pub theme: ThemeContext,

    /// Playlist panel visibility and typed link.
    pub music: MusicPanel,

    /// Link last handed back by the panel's add action.
    pub playlist_link: String,

    /// Status line for `playlist_link`, resolved when the link is added.
    playlist_status: Option<String>,

    /// Mirror of the pane's fullscreen state as last reported by Zellij.
    pub fullscreen: bool,

    /// Last pointer position, `None` until the mouse is seen.
    pub pointer: Option<Pointer>,

    /// Display mounted for the current mode.
    pub view: MountedView,

    /// Configured countdown and Pomodoro lengths.
    pub durations: SessionDurations,

    /// Clock face format.
    pub hour_format: HourFormat,
}

impl AppState {
    /// Creates the initial state: Clock mode, dialog open, timer inactive.
    ///
    /// ```rust
    /// use flocus::app::{AppState, SessionDurations, ThemeContext, ViewMode};
    /// use flocus::widgets::HourFormat;
    ///
    /// let state = AppState::new(ThemeContext::default(), SessionDurations::default(), HourFormat::TwentyFour);
    /// assert_eq!(state.modes.current(), ViewMode::Clock);
    /// assert!(state.dialog.is_open());
    /// ```
    #[must_use]
    pub fn new(theme: ThemeContext, durations: SessionDurations, hour_format: HourFormat) -> Self {
        Self {
            modes: ModeController::default(),
            timer: TimerSession::new(),
            dialog: OnboardingDialog::default(),
            theme,
            music: MusicPanel::default(),
            playlist_link: String::new(),
            playlist_status: None,
            fullscreen: false,
            pointer: None,
            view: MountedView::Clock,
            durations,
            hour_format,
        }
    }

    /// Where key presses should be routed.
    #[must_use]
    pub const fn input_focus(&self) -> InputFocus {
        if self.dialog.is_open() {
            InputFocus::Dialog
        } else if self.music.is_open() {
            InputFocus::MusicPanel
        } else {
            InputFocus::Normal
        }
    }

    /// Selects a view mode and remounts the body if it changed.
    ///
    /// Returns `false` when `mode` was already selected.
    pub fn select_mode(&mut self, mode: ViewMode) -> bool {
        if !self.modes.select(mode) {
            return false;
        }
        self.mount();
        true
    }

    /// Starts the timer session.
    pub fn start_timer(&mut self) {
        self.timer.start();
        tracing::debug!(key = self.timer.instance_key(), "timer started");
    }

    /// Resets the timer session and rebuilds the countdown under the new key.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        tracing::debug!(key = self.timer.instance_key(), "timer reset");
        self.sync_timer_key();
    }

    /// Remounts the countdown if the session moved to another key.
    ///
    /// The session key is the countdown's identity, so a reset made directly on
    /// `timer` still discards the old progress on the next tick.
    fn sync_timer_key(&mut self) {
        if let MountedView::Timer(countdown) = &self.view {
            if countdown.key() != self.timer.instance_key() {
                self.mount();
            }
        }
    }

    /// Stores a link handed back by the music panel.
    ///
    /// The link is kept as typed; recognition only decides the status line.
    pub fn add_playlist(&mut self, link: String) {
        tracing::debug!(link_len = link.len(), "playlist link added");

        self.playlist_status = if link.is_empty() {
            None
        } else {
            Some(match Playlist::parse(&link) {
                Ok(playlist) => format!("Now embedding {}", playlist.embed_url()),
                Err(e) => {
                    tracing::debug!(error = %e, "playlist link not recognized");
                    e.to_string()
                }
            })
        };
        self.playlist_link = link;
    }

    /// Records the platform-reported fullscreen state. Returns `true` on change.
    pub fn sync_fullscreen(&mut self, is_fullscreen: bool) -> bool {
        if self.fullscreen == is_fullscreen {
            return false;
        }
        tracing::debug!(fullscreen = is_fullscreen, "fullscreen state resynchronized");
        self.fullscreen = is_fullscreen;
        true
    }

    /// Delivers a heartbeat to the mounted display.
    ///
    /// Returns `true` if the display's internal state changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.sync_timer_key();

        match &mut self.view {
            MountedView::Clock => false,
            MountedView::Timer(countdown) => countdown.tick(elapsed, self.timer.is_active()),
            MountedView::Pomodoro(pomodoro) => pomodoro.tick(elapsed),
        }
    }

    /// Builds a fresh display for the current mode.
    fn mount(&mut self) {
        self.view = match self.modes.current() {
            ViewMode::Clock => MountedView::Clock,
            ViewMode::Timer => {
                MountedView::Timer(Countdown::new(self.timer.instance_key(), self.durations.timer))
            }
            ViewMode::Pomodoro => {
                MountedView::Pomodoro(Pomodoro::new(self.durations.work, self.durations.rest))
            }
        };
        tracing::debug!(view = ?self.modes.current(), "display mounted");
    }

    /// Computes the renderable view model.
    ///
    /// `now` is the local wall time; the pane size feeds the pointer tint.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize, now: NaiveDateTime) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(rows, cols, now),
            body: self.compute_body(now),
            footer: self.compute_footer(),
            dialog: self.compute_dialog(),
            music_panel: self.compute_music_panel(),
        }
    }

    fn compute_header(&self, rows: usize, cols: usize, now: NaiveDateTime) -> HeaderInfo {
        HeaderInfo {
            title: " Flocus ".to_string(),
            quote: quote::quote_for(now.date()).display(),
            backdrop: self.compute_backdrop(rows, cols),
        }
    }

    /// Header background.
    ///
    /// Dark mode uses the palette's solid background. Light mode blends the two
    /// backdrop colors by pointer column and lays the result over white with an
    /// opacity of 0.7 at the top row rising to 1.0 at the bottom.
    fn compute_backdrop(&self, rows: usize, cols: usize) -> Option<String> {
        let colors = &self.theme.palette().colors;

        match self.theme.variant() {
            ThemeVariant::Dark => colors.background.clone(),
            ThemeVariant::Light => {
                let Pointer { row, col } = self.pointer.unwrap_or(Pointer { row: 0, col: 0 });

                #[allow(clippy::cast_precision_loss)]
                let fraction = |pos: usize, len: usize| {
                    if len == 0 { 0.0 } else { pos as f64 / len as f64 }
                };
                let x = fraction(col, cols);
                let y = fraction(row, rows);

                let tint = Theme::blend(&colors.backdrop_start, &colors.backdrop_end, x);
                Some(Theme::blend("#ffffff", &tint, 0.7 + y * 0.3))
            }
        }
    }

    fn compute_body(&self, now: NaiveDateTime) -> BodyView {
        match &self.view {
            MountedView::Clock => BodyView::Clock {
                time: clock::format_time(now.time(), self.hour_format),
                meridiem: clock::meridiem(now.time(), self.hour_format),
                greeting: clock::greeting(now.hour(), self.dialog.name()),
                date: clock::date_line(now),
            },
            MountedView::Timer(countdown) => {
                // A countdown under a stale key renders as its fresh replacement.
                let remaining = if countdown.key() == self.timer.instance_key() {
                    countdown.remaining()
                } else {
                    self.durations.timer
                };
                let status = if remaining.is_zero() {
                    TimerStatus::Finished
                } else if self.timer.is_active() {
                    TimerStatus::Running
                } else {
                    TimerStatus::Ready
                };
                BodyView::Timer {
                    remaining: countdown::format_remaining(remaining),
                    status,
                }
            }
            MountedView::Pomodoro(pomodoro) => BodyView::Pomodoro {
                remaining: countdown::format_remaining(pomodoro.remaining()),
                phase: pomodoro.phase(),
                running: pomodoro.is_running(),
                completed: pomodoro.completed(),
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        const NAVIGATION: &str = "c/t/p/Tab: mode  d: theme  f: fullscreen  m: music  q: hide";

        let keybindings = match (self.input_focus(), self.modes.current()) {
            (InputFocus::Dialog, _) => "Type your name  Enter: get started  Esc: close".to_string(),
            (InputFocus::MusicPanel, _) => {
                "Type or paste a link  Enter: add playlist  Esc: close panel".to_string()
            }
            (InputFocus::Normal, ViewMode::Clock) => NAVIGATION.to_string(),
            (InputFocus::Normal, ViewMode::Timer) => format!("s: start  r: reset  {NAVIGATION}"),
            (InputFocus::Normal, ViewMode::Pomodoro) => {
                format!("s: start/pause  r: reset  n: skip  {NAVIGATION}")
            }
        };

        let mut indicators = vec![format!("[{}]", self.theme.variant().as_str())];
        if self.fullscreen {
            indicators.push("[fullscreen]".to_string());
        }
        if !self.playlist_link.is_empty() {
            indicators.push("[music]".to_string());
        }
        if self.timer.is_active() && self.modes.current() != ViewMode::Timer {
            indicators.push("[timer running]".to_string());
        }

        FooterInfo {
            keybindings,
            indicators: indicators.join(" "),
        }
    }

    fn compute_dialog(&self) -> Option<DialogInfo> {
        self.dialog.is_open().then(|| DialogInfo {
            title: "Welcome to Flocus".to_string(),
            description: "Please enter your name for a personalized experience.".to_string(),
            name: self.dialog.name().to_string(),
        })
    }

    fn compute_music_panel(&self) -> Option<MusicPanelInfo> {
        if !self.music.is_open() {
            return None;
        }

        let current = self
            .playlist_status
            .clone()
            .unwrap_or_else(|| "No playlist added yet".to_string());

        Some(MusicPanelInfo {
            draft: self.music.draft().to_string(),
            current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(
            ThemeContext::default(),
            SessionDurations {
                timer: Duration::from_secs(90),
                work: Duration::from_secs(120),
                rest: Duration::from_secs(60),
            },
            HourFormat::TwentyFour,
        )
    }

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 41, 0)
            .unwrap()
    }

    fn countdown(state: &AppState) -> &Countdown {
        match &state.view {
            MountedView::Timer(countdown) => countdown,
            other => panic!("expected timer view, got {other:?}"),
        }
    }

    #[test]
    fn selecting_timer_mounts_countdown_under_session_key() {
        let mut state = state();
        state.reset_timer();
        assert!(state.select_mode(ViewMode::Timer));

        assert_eq!(countdown(&state).key(), 1);
        assert_eq!(countdown(&state).remaining(), Duration::from_secs(90));
    }

    #[test]
    fn reselecting_mode_keeps_mounted_progress() {
        let mut state = state();
        state.select_mode(ViewMode::Timer);
        state.start_timer();
        state.tick(Duration::from_secs(5));

        assert!(!state.select_mode(ViewMode::Timer));
        assert_eq!(countdown(&state).remaining(), Duration::from_secs(85));
    }

    #[test]
    fn reset_rebuilds_countdown_from_full_duration() {
        let mut state = state();
        state.select_mode(ViewMode::Timer);
        state.start_timer();
        state.tick(Duration::from_secs(30));

        state.reset_timer();

        assert!(!state.timer.is_active());
        assert_eq!(countdown(&state).key(), 1);
        assert_eq!(countdown(&state).remaining(), Duration::from_secs(90));
        assert!(!state.tick(Duration::from_secs(1)));
    }

    #[test]
    fn direct_session_reset_discards_countdown_progress() {
        let mut state = state();
        state.select_mode(ViewMode::Timer);
        state.timer.start();
        state.tick(Duration::from_secs(30));

        state.timer.reset();
        match state.compute_viewmodel(24, 80, morning()).body {
            BodyView::Timer { remaining, status } => {
                assert_eq!(remaining, "01:30");
                assert_eq!(status, TimerStatus::Ready);
            }
            other => panic!("expected timer body, got {other:?}"),
        }

        state.timer.start();
        assert!(state.tick(Duration::from_secs(1)));
        assert_eq!(countdown(&state).key(), 1);
        assert_eq!(countdown(&state).remaining(), Duration::from_secs(89));
    }

    #[test]
    fn leaving_timer_keeps_session_running_but_drops_progress() {
        let mut state = state();
        state.select_mode(ViewMode::Timer);
        state.start_timer();
        state.tick(Duration::from_secs(10));

        state.select_mode(ViewMode::Clock);
        assert!(state.timer.is_active());
        assert_eq!(state.view, MountedView::Clock);

        state.select_mode(ViewMode::Timer);
        assert!(state.timer.is_active());
        assert_eq!(countdown(&state).key(), 0);
        assert_eq!(countdown(&state).remaining(), Duration::from_secs(90));
    }

    #[test]
    fn ticks_reach_only_the_mounted_display() {
        let mut state = state();
        assert!(!state.tick(Duration::from_secs(1)));

        state.select_mode(ViewMode::Pomodoro);
        if let MountedView::Pomodoro(pomodoro) = &mut state.view {
            pomodoro.toggle_running();
        }
        assert!(state.tick(Duration::from_secs(1)));

        match &state.view {
            MountedView::Pomodoro(pomodoro) => {
                assert_eq!(pomodoro.remaining(), Duration::from_secs(119));
            }
            other => panic!("expected pomodoro view, got {other:?}"),
        }
    }

    #[test]
    fn focus_prefers_dialog_over_music_panel() {
        let mut state = state();
        state.music.toggle();
        assert_eq!(state.input_focus(), InputFocus::Dialog);

        state.dialog.submit();
        assert_eq!(state.input_focus(), InputFocus::MusicPanel);

        state.music.close();
        assert_eq!(state.input_focus(), InputFocus::Normal);
    }

    #[test]
    fn clock_body_greets_captured_name() {
        let mut state = state();
        "Ada".chars().for_each(|c| state.dialog.push(c));
        state.dialog.submit();

        let vm = state.compute_viewmodel(24, 80, morning());
        match vm.body {
            BodyView::Clock { time, greeting, meridiem, date } => {
                assert_eq!(time, "09:41");
                assert_eq!(greeting, "Good morning, Ada");
                assert_eq!(meridiem, None);
                assert_eq!(date, "Saturday, 17 October");
            }
            other => panic!("expected clock body, got {other:?}"),
        }
        assert!(vm.dialog.is_none());
    }

    #[test]
    fn timer_body_reports_status() {
        let mut state = state();
        state.select_mode(ViewMode::Timer);

        let status = |s: &AppState| match s.compute_viewmodel(24, 80, morning()).body {
            BodyView::Timer { status, .. } => status,
            other => panic!("expected timer body, got {other:?}"),
        };

        assert_eq!(status(&state), TimerStatus::Ready);
        state.start_timer();
        assert_eq!(status(&state), TimerStatus::Running);
        state.tick(Duration::from_secs(90));
        assert_eq!(status(&state), TimerStatus::Finished);
    }

    #[test]
    fn backdrop_tracks_pointer_in_light_mode() {
        let mut state = state();
        let colors = state.theme.palette().colors.clone();

        let top_left = state.compute_viewmodel(10, 100, morning()).header.backdrop;
        assert_eq!(
            top_left,
            Some(Theme::blend("#ffffff", &colors.backdrop_start, 0.7))
        );

        state.pointer = Some(Pointer { row: 10, col: 100 });
        let bottom_right = state.compute_viewmodel(10, 100, morning()).header.backdrop;
        assert_eq!(bottom_right, Some(colors.backdrop_end));
    }

    #[test]
    fn backdrop_is_solid_in_dark_mode() {
        let mut state = state();
        state.theme.toggle();
        state.pointer = Some(Pointer { row: 3, col: 7 });

        let backdrop = state.compute_viewmodel(24, 80, morning()).header.backdrop;
        assert_eq!(backdrop.as_deref(), Some("#000000"));
    }

    #[test]
    fn footer_flags_background_timer() {
        let mut state = state();
        state.dialog.dismiss();
        state.select_mode(ViewMode::Timer);
        state.start_timer();
        state.select_mode(ViewMode::Clock);

        let footer = state.compute_viewmodel(24, 80, morning()).footer;
        assert_eq!(footer.indicators, "[light] [timer running]");
        assert!(footer.keybindings.starts_with("c/t/p/Tab: mode"));
    }

    #[test]
    fn music_panel_describes_stored_link() {
        let mut state = state();
        state.music.toggle();

        let panel = state.compute_viewmodel(24, 80, morning()).music_panel.unwrap();
        assert_eq!(panel.current, "No playlist added yet");

        state.add_playlist("spotify:playlist:37i9dQZF1DX8NTLI2TtZa6".to_string());
        let panel = state.compute_viewmodel(24, 80, morning()).music_panel.unwrap();
        assert_eq!(
            panel.current,
            "Now embedding https://open.spotify.com/embed/playlist/37i9dQZF1DX8NTLI2TtZa6"
        );

        state.add_playlist("not a link".to_string());
        let panel = state.compute_viewmodel(24, 80, morning()).music_panel.unwrap();
        assert!(panel.current.starts_with("Playlist error:"));

        state.add_playlist(String::new());
        let panel = state.compute_viewmodel(24, 80, morning()).music_panel.unwrap();
        assert_eq!(panel.current, "No playlist added yet");
    }

    #[test]
    fn fullscreen_sync_reports_changes_only() {
        let mut state = state();
        assert!(!state.sync_fullscreen(false));
        assert!(state.sync_fullscreen(true));
        assert!(!state.sync_fullscreen(true));
        assert!(state.fullscreen);
    }
}
