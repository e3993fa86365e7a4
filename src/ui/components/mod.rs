//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title and quote over the backdrop color
//! - [`body`]: Clock, countdown or Pomodoro face
//! - [`digits`]: Block-letter glyphs for the faces
//! - [`overlay`]: Onboarding dialog and music panel frames
//! - [`footer`]: Key hints and status indicators
//!
//! # Layout
//!
//! ```text
//! [Header title]
//! [Header quote]
//! [Border]
//! [Body, vertically centered; overlays drawn on top]
//! [Border]
//! [Footer]
//! ```

mod body;
mod digits;
mod footer;
mod header;
mod overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use body::render_body;
use footer::render_footer;
use header::render_header;
use overlay::{render_dialog, render_music_panel};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane.
///
/// The onboarding dialog is drawn last so it sits above the music panel when
/// both are open.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    let body_top = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.max(body_top + 2);
    let border_row = footer_row - 1;
    let body_bottom = border_row.saturating_sub(1).max(body_top);

    render_body(body_top, body_bottom, &vm.body, theme, cols);

    if let Some(panel) = &vm.music_panel {
        render_music_panel(body_top, body_bottom, panel, theme, cols);
    }
    if let Some(dialog) = &vm.dialog {
        render_dialog(body_top, body_bottom, dialog, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
