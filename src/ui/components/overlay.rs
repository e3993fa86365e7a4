//! Framed overlays drawn over the body: the onboarding dialog and the music
//! panel.
//!
//! Both share one frame: a titled border, a few text lines and a single input
//! field with a block cursor.
//!
//! ```text
//! ┌─ Welcome to Flocus ─────────────────┐
//! │                                     │
//! │ Please enter your name for a ...    │
//! │                                     │
//! │ > Ada█                              │
//! └─────────────────────────────────────┘
//! ```

use crate::ui::helpers::{center_offset, display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogInfo, MusicPanelInfo};

/// Widest an overlay grows, borders included.
const MAX_WIDTH: usize = 56;

/// Horizontal margin kept free on narrow panes.
const MARGIN: usize = 2;

/// Frame content before it is positioned.
struct Frame<'a> {
    title: &'a str,
    lines: Vec<&'a str>,
    input: &'a str,
}

impl Frame<'_> {
    /// Rows including both borders.
    fn height(&self) -> usize {
        self.lines.len() + 5
    }
}

/// Text of the input row, keeping the end of long input visible.
fn input_text(input: &str, inner: usize) -> String {
    let room = inner.saturating_sub(4);
    let chars: Vec<char> = input.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(room)..].iter().collect();
    format!(" > {tail}█")
}

fn render_frame(top: usize, frame: &Frame<'_>, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(MARGIN * 2).min(MAX_WIDTH);
    if width < 8 {
        return;
    }
    let inner = width - 2;
    let left = center_offset(width, cols) + 1;
    let border = Theme::fg(&theme.colors.dialog_border);

    let title = truncate(&format!(" {} ", frame.title), inner.saturating_sub(1));
    position_cursor(top, left);
    print!(
        "{border}┌─{}{title}{border}{}┐{}",
        Theme::bold(),
        "─".repeat(inner.saturating_sub(1 + display_width(&title))),
        Theme::reset()
    );

    let mut row = top + 1;
    let mut text_row = |text: &str, style: String| {
        let text = truncate(text, inner.saturating_sub(1));
        position_cursor(row, left);
        print!(
            "{border}│{style} {text}{}{border}│{}",
            " ".repeat(inner.saturating_sub(1 + display_width(&text))),
            Theme::reset()
        );
        row += 1;
    };

    let normal = Theme::fg(&theme.colors.text_normal);
    text_row("", normal.clone());
    for line in &frame.lines {
        text_row(*line, normal.clone());
    }
    text_row("", normal);

    let field = input_text(frame.input, inner);
    position_cursor(row, left);
    print!(
        "{border}│{}{}{field}{}{}{border}│{}",
        Theme::fg(&theme.colors.input_fg),
        Theme::bg(&theme.colors.input_bg),
        " ".repeat(inner.saturating_sub(display_width(&field))),
        Theme::reset(),
        Theme::reset()
    );

    position_cursor(row + 1, left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// Draws `frame` vertically centered between rows `top` and `bottom`.
fn render_centered(top: usize, bottom: usize, frame: &Frame<'_>, theme: &Theme, cols: usize) {
    let height = bottom.saturating_sub(top) + 1;
    render_frame(top + center_offset(frame.height(), height), frame, theme, cols);
}

/// Renders the onboarding dialog.
pub fn render_dialog(top: usize, bottom: usize, dialog: &DialogInfo, theme: &Theme, cols: usize) {
    let frame = Frame {
        title: &dialog.title,
        lines: vec![dialog.description.as_str()],
        input: &dialog.name,
    };
    render_centered(top, bottom, &frame, theme, cols);
}

/// Renders the music panel.
pub fn render_music_panel(
    top: usize,
    bottom: usize,
    panel: &MusicPanelInfo,
    theme: &Theme,
    cols: usize,
) {
    let frame = Frame {
        title: "Music",
        lines: vec!["Add a Spotify playlist or album link.", "", panel.current.as_str()],
        input: &panel.draft,
    };
    render_centered(top, bottom, &frame, theme, cols);
}
