use unicode_width::UnicodeWidthChar;

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Display width of a single character. Control characters count as zero.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Width of the widest `\n`-separated line.
pub fn widest_line(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

/// Number of `\n`-separated lines; empty content has none.
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_sequences_do_not_count() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(char_width('日'), 2);
        assert_eq!(char_width('\u{7}'), 0);
    }

    #[test]
    fn widest_line_and_count() {
        assert_eq!(widest_line("ab\nabcd\n"), 4);
        assert_eq!(line_count("ab\nabcd\n"), 3);
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("one"), 1);
    }
}
