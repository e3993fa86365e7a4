//! Top-level rendering coordinator.
//!
//! Reads the local wall time, computes the view model and hands it to the
//! component layout together with the active palette.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let now = chrono::Local::now().naive_local();
    let viewmodel = state.compute_viewmodel(rows, cols, now);

    components::render_layout(&viewmodel, state.theme.palette(), cols, rows);
}
