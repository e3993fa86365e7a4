//! Shared rendering utilities.
//!
//! Cursor movement plus width arithmetic on display text. Widths are counted in
//! `char`s; every string the plugin draws is single-width.

/// Positions the cursor at a specific row and column (1-indexed).
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` cells, ending with `…` when shortened.
///
/// ```rust
/// use flocus::ui::helpers::truncate;
///
/// assert_eq!(truncate("focus", 10), "focus");
/// assert_eq!(truncate("focus", 4), "foc…");
/// assert_eq!(truncate("focus", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Left padding that centers `len` cells inside `width`.
///
/// Odd remainders go to the right side.
#[must_use]
pub const fn center_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Pads `text` with spaces on both sides to exactly `width` cells, truncating first.
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = display_width(&text);
    let left = center_offset(len, width);
    format!(
        "{}{text}{}",
        " ".repeat(left),
        " ".repeat(width.saturating_sub(left + len))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fills_exact_width() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("ab", 5), " ab  ");
        assert_eq!(display_width(&centered("a long line", 4)), 4);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("☕ break", 7), "☕ break");
        assert_eq!(truncate("☕ break", 3), "☕ …");
    }

    #[test]
    fn center_offset_saturates() {
        assert_eq!(center_offset(10, 4), 0);
        assert_eq!(center_offset(4, 10), 3);
    }
}
