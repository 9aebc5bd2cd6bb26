use crate::model::Whitespace;
use crate::width::{char_width, display_width};

/// Apply whitespace collapsing. `normal` collapses runs of blanks inside each
/// line and trims the ends; `preserve` leaves content untouched.
/// `wrap-never` additionally folds newlines into spaces.
pub fn normalize(content: &str, whitespace: Whitespace) -> String {
    let collapsed = if whitespace.contains(Whitespace::PRESERVE) {
        content.to_string()
    } else {
        content
            .split('\n')
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    };

    if whitespace.contains(Whitespace::WRAP_NEVER) {
        collapsed.replace('\n', " ")
    } else {
        collapsed
    }
}

/// Break content into display lines for the given width.
///
/// `wrap-never` yields a single line, `wrap-line` splits only at explicit
/// newlines, and the default word-wraps any line wider than `width`.
/// A non-positive width disables reflow.
pub fn wrap_lines(content: &str, width: i32, whitespace: Whitespace) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let normalized = normalize(content, whitespace);

    if whitespace.contains(Whitespace::WRAP_NEVER) {
        return vec![normalized];
    }

    let lines = normalized.split('\n');
    if whitespace.contains(Whitespace::WRAP_LINE) || width <= 0 {
        return lines.map(str::to_string).collect();
    }

    lines
        .flat_map(|line| word_wrap(line, width as usize))
        .collect()
}

/// Greedy word wrap of a single line. Words wider than `width` are broken
/// at character boundaries. Blank runs at a break are dropped.
pub fn word_wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for token in tokens(line) {
        let token_width = display_width(token);
        if current_width + token_width <= width {
            current.push_str(token);
            current_width += token_width;
            continue;
        }

        if token.starts_with(char::is_whitespace) {
            flush(&mut lines, &mut current);
            current_width = 0;
            continue;
        }

        if !current.is_empty() {
            flush(&mut lines, &mut current);
            current_width = 0;
        }

        if token_width <= width {
            current.push_str(token);
            current_width = token_width;
            continue;
        }

        for ch in token.chars() {
            let ch_width = char_width(ch);
            if current_width + ch_width > width && !current.is_empty() {
                flush(&mut lines, &mut current);
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.trim_end().is_empty() {
        flush(&mut lines, &mut current);
    }
    lines
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    let line = std::mem::take(current);
    lines.push(line.trim_end().to_string());
}

/// Split into alternating runs of blanks and non-blanks.
fn tokens(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (idx, ch) in line.char_indices() {
        let is_space = ch.is_whitespace();
        match in_space {
            Some(previous) if previous != is_space => {
                out.push(&line[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(is_space);
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(word_wrap("hello world", 5), vec!["hello", "world"]);
        assert_eq!(
            word_wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn breaks_long_words() {
        assert_eq!(word_wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(word_wrap("ab abcdefg", 4), vec!["ab", "abcd", "efg"]);
    }

    #[test]
    fn wide_glyphs_do_not_split_cells() {
        assert_eq!(word_wrap("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn normal_collapses_blanks() {
        assert_eq!(normalize("  a   b \n c", Whitespace::NORMAL), "a b\nc");
        assert_eq!(normalize("  a   b", Whitespace::PRESERVE), "  a   b");
        assert_eq!(normalize("a\nb", Whitespace::WRAP_NEVER), "a b");
    }

    #[test]
    fn wrap_modes() {
        let text = "one two three\nfour";
        assert_eq!(
            wrap_lines(text, 7, Whitespace::NORMAL),
            vec!["one two", "three", "four"]
        );
        assert_eq!(
            wrap_lines(text, 7, Whitespace::WRAP_LINE),
            vec!["one two three", "four"]
        );
        assert_eq!(
            wrap_lines(text, 7, Whitespace::WRAP_NEVER),
            vec!["one two three four"]
        );
        assert_eq!(wrap_lines(text, 0, Whitespace::NORMAL).len(), 2);
        assert!(wrap_lines("", 7, Whitespace::NORMAL).is_empty());
    }

    #[test]
    fn tokens_alternate() {
        assert_eq!(tokens("a  bc d"), vec!["a", "  ", "bc", " ", "d"]);
        assert_eq!(tokens(" x"), vec![" ", "x"]);
    }
}
