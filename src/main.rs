//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Flocus library and the
//! Zellij plugin system. It is the only place that calls Zellij host functions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, Timer and `PaneUpdate` events
//! 3. **Heartbeat**: Arm a one-second timeout; every `Timer` event re-arms it
//! 4. **Update**: Translate events, delegate to the library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → mode, control and chrome events, or text input when the dialog or
//!   the music panel has focus
//! - `Mouse(Hover | LeftClick | Hold)` → `Event::PointerMoved`
//! - `Timer(elapsed)` → `Event::Tick`
//! - `PaneUpdate` → `Event::FullscreenChanged` for this plugin's pane
//!
//! # Keybindings
//!
//! In normal focus:
//! - `c`/`t`/`p`: Clock, Timer, Pomodoro
//! - `Tab`: Next mode
//! - `s`: Start (Pomodoro: start/pause)
//! - `r`: Reset
//! - `n`: Skip Pomodoro phase
//! - `d`: Toggle light/dark
//! - `f`: Toggle fullscreen
//! - `m`: Toggle music panel
//! - `q`: Hide plugin
//!
//! In the dialog or music panel:
//! - Printable keys: Type
//! - `Backspace`: Delete
//! - `Enter`: Submit
//! - `Esc`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Duration;
use zellij_tile::prelude::*;

use flocus::app::{fullscreen_from_manifest, InputFocus};
use flocus::{handle_event, Action, Config, Event, ViewMode};

register_plugin!(State);

/// Zellij's event type, named apart from the library's `Event`.
type HostEvent = zellij_tile::prelude::Event;

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the plugin id Zellij assigned us, which
/// is needed to find our own pane in `PaneUpdate` manifests.
struct State {
    /// Core application state from library layer.
    app: flocus::AppState,

    /// Id of this plugin's pane, known after load.
    plugin_id: Option<u32>,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: flocus::initialize(&default_config),
            plugin_id: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`: Pane manifests for fullscreen mirroring
    /// - `ChangeApplicationState`: Toggle fullscreen and hide the pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        flocus::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            timer_minutes = config.timer_minutes,
            work_minutes = config.work_minutes,
            break_minutes = config.break_minutes,
            "parsed configuration"
        );
        self.app = flocus::initialize(&config);
        self.plugin_id = Some(get_plugin_ids().plugin_id);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::PaneUpdate,
            EventType::PermissionRequestResult,
        ]);

        set_timeout(flocus::app::handler::TICK_SECONDS);
        tracing::debug!(plugin_id = ?self.plugin_id, "plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: HostEvent) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            HostEvent::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            HostEvent::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            HostEvent::Timer(elapsed) => Event::Tick {
                elapsed: Duration::try_from_secs_f64(elapsed).unwrap_or_default(),
            },
            HostEvent::PaneUpdate(ref manifest) => {
                match self.map_pane_update_event(manifest) {
                    Some(event) => event,
                    None => return false,
                }
            }
            HostEvent::PermissionRequestResult(permissions) => {
                Self::handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        flocus::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &HostEvent) -> String {
        match event {
            HostEvent::Key(key) => format!("Key({:?})", key.bare_key),
            HostEvent::Mouse(..) => "Mouse".to_string(),
            HostEvent::Timer(..) => "Timer".to_string(),
            HostEvent::PaneUpdate(..) => "PaneUpdate".to_string(),
            HostEvent::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events according to input focus.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let plain = key.key_modifiers.is_empty();
        let typable = !key.key_modifiers.contains(&KeyModifier::Ctrl)
            && !key.key_modifiers.contains(&KeyModifier::Alt);

        match self.app.input_focus() {
            InputFocus::Dialog | InputFocus::MusicPanel => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Dismiss,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if typable => Event::Char(c),
                _ => return None,
            }),
            InputFocus::Normal if plain => Some(match key.bare_key {
                BareKey::Char('c') => Event::SelectMode(ViewMode::Clock),
                BareKey::Char('t') => Event::SelectMode(ViewMode::Timer),
                BareKey::Char('p') => Event::SelectMode(ViewMode::Pomodoro),
                BareKey::Tab => Event::CycleMode,
                BareKey::Char('s') => Event::Start,
                BareKey::Char('r') => Event::Reset,
                BareKey::Char('n') => Event::SkipPhase,
                BareKey::Char('d') => Event::ToggleTheme,
                BareKey::Char('f') => Event::ToggleFullscreen,
                BareKey::Char('m') => Event::ToggleMusicPanel,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            InputFocus::Normal => None,
        }
    }

    /// Maps mouse movement and clicks to pointer updates.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::Hover(line, col) | Mouse::LeftClick(line, col) | Mouse::Hold(line, col) => {
                Some(Event::PointerMoved {
                    row: usize::try_from(line).unwrap_or(0),
                    col,
                })
            }
            _ => None,
        }
    }

    /// Finds this plugin's pane in the manifest and reports its fullscreen state.
    fn map_pane_update_event(&self, manifest: &PaneManifest) -> Option<Event> {
        fullscreen_from_manifest(manifest, self.plugin_id?)
    }

    /// Handles permission request results.
    fn handle_permission_result(permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - fullscreen and hide unavailable");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::ToggleFullscreen => {
                tracing::debug!("toggling pane fullscreen");
                toggle_focus_fullscreen();
            }
            Action::ScheduleTick { seconds } => {
                set_timeout(*seconds);
            }
        }
    }
}
