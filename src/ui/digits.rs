//! Five-row block digits for the stopwatch reading.

pub const HEIGHT: usize = 5;

const DIGITS: [[&str; HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];
const COLON: [&str; HEIGHT] = [" ", "█", " ", "█", " "];
const DOT: [&str; HEIGHT] = [" ", " ", " ", " ", "█"];

fn glyph(c: char) -> Option<&'static [&'static str; HEIGHT]> {
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        ':' => Some(&COLON),
        '.' => Some(&DOT),
        _ => None,
    }
}

/// Render `text` as block rows, glyphs separated by one blank column.
/// `None` if it contains a character with no glyph.
pub fn render(text: &str) -> Option<[String; HEIGHT]> {
    let mut rows: [String; HEIGHT] = Default::default();
    for (i, c) in text.chars().enumerate() {
        let g = glyph(c)?;
        for (row, part) in rows.iter_mut().zip(g.iter()) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    Some(rows)
}

/// Display width in columns of the rendered `text`.
pub fn width(text: &str) -> u16 {
    let glyphs: u16 = text
        .chars()
        .filter_map(glyph)
        .map(|g| g[0].chars().count() as u16)
        .sum();
    let n = text.chars().count() as u16;
    glyphs + n.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_reading_width() {
        assert_eq!(width("00:00.00"), 27);
        assert_eq!(width("100:00.00"), 31);
    }

    #[test]
    fn test_render_rows_match_width() {
        let rows = render("12:34.56").unwrap();
        for row in &rows {
            assert_eq!(row.width() as u16, width("12:34.56"));
        }
        assert_eq!(rows[4], "███ ███   ███   █ █ ███ ███");
    }

    #[test]
    fn test_unknown_char() {
        assert!(render("1-2").is_none());
    }
}
