//! Header component renderer.
//!
//! Two rows: the title and the quote of the day, both painted over the
//! backdrop color computed by the state.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header starting at `row` and returns the next free row.
///
/// ```text
/// [backdrop]             Flocus              [backdrop]
/// [backdrop] "Well begun is half done." - Aristotle
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let backdrop = header.backdrop.as_deref().map(Theme::bg).unwrap_or_default();

    position_cursor(row, 1);
    print!("{backdrop}{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", centered(&header.title, cols));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{backdrop}{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", centered(&header.quote, cols));
    print!("{}", Theme::reset());

    row + 2
}
