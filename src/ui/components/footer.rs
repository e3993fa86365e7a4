//! Footer component renderer.
//!
//! Key hints on the left, status indicators on the right. When both do not fit,
//! the hints are truncated first.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Lays out the footer text for a row of `cols` cells.
pub fn footer_line(footer: &FooterInfo, cols: usize) -> String {
    let indicators = truncate(&footer.indicators, cols);
    let right = display_width(&indicators);
    let room = cols.saturating_sub(right + 1);

    let hints = truncate(&footer.keybindings, room);
    let gap = cols.saturating_sub(display_width(&hints) + right);

    format!("{hints}{}{indicators}", " ".repeat(gap))
}

/// Renders the footer at `row` and returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", footer_line(footer, cols));
    print!("{}", Theme::reset());
    row + 1
}
