//! Block-letter digits for the clock and countdown faces.
//!
//! Each glyph is three cells wide and five rows tall. Glyphs are joined with a
//! one-cell gap.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

const GLYPH_WIDTH: usize = 3;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => ["   ", " █ ", "   ", " █ ", "   "],
        _ => return None,
    };
    Some(rows)
}

/// Cells needed to draw `text` in block letters.
#[must_use]
pub fn big_text_width(text: &str) -> usize {
    let n = text.chars().count();
    if n == 0 {
        0
    } else {
        n * (GLYPH_WIDTH + 1) - 1
    }
}

/// Renders `text` as block letters, or `None` if a character has no glyph.
pub fn big_text_lines(text: &str) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;

    let lines = (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_time_in_five_rows() {
        let lines = big_text_lines("10:05").unwrap();
        assert_eq!(lines.len(), GLYPH_HEIGHT);
        assert_eq!(lines[0], "  █ ███     ███ ███");
        assert_eq!(lines[1], "  █ █ █  █  █ █ █  ");
        for line in &lines {
            assert_eq!(line.chars().count(), big_text_width("10:05"));
        }
    }

    #[test]
    fn unknown_characters_have_no_glyph() {
        assert!(big_text_lines("1:05 PM").is_none());
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(big_text_width(""), 0);
        assert_eq!(big_text_lines(""), Some(vec![String::new(); GLYPH_HEIGHT]));
    }
}
