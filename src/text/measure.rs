use crate::model::Whitespace;
use crate::width::{line_count, widest_line};

use super::wrap::{normalize, wrap_lines};

/// Width of the widest line after whitespace normalization.
pub fn natural_width(content: &str, whitespace: Whitespace) -> i32 {
    widest_line(&normalize(content, whitespace)) as i32
}

/// Line count of `content`, excluding border and padding.
///
/// `wrap-never` is always one line. `wrap-line` counts explicit lines only.
/// Otherwise content wider than `wrap_width` is reflowed first.
pub fn natural_height(content: &str, whitespace: Whitespace, wrap_width: Option<i32>) -> i32 {
    if whitespace.contains(Whitespace::WRAP_NEVER) {
        return 1;
    }
    if whitespace.contains(Whitespace::WRAP_LINE) {
        return line_count(&normalize(content, whitespace)) as i32;
    }
    match wrap_width {
        Some(width) if natural_width(content, whitespace) > width => {
            wrap_lines(content, width, whitespace).len() as i32
        }
        _ => line_count(&normalize(content, whitespace)) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_never_is_one_line() {
        let long = "word ".repeat(50);
        assert_eq!(natural_height(&long, Whitespace::WRAP_NEVER, Some(10)), 1);
        assert_eq!(natural_height("a\nb\nc", Whitespace::WRAP_NEVER, None), 1);
        assert_eq!(natural_height("", Whitespace::WRAP_NEVER, None), 1);
    }

    #[test]
    fn wrap_line_ignores_width() {
        assert_eq!(
            natural_height("a long first line\nb", Whitespace::WRAP_LINE, Some(3)),
            2
        );
    }

    #[test]
    fn default_reflows_when_too_wide() {
        assert_eq!(natural_height("aaa bbb ccc", Whitespace::NORMAL, Some(7)), 2);
        assert_eq!(natural_height("aaa bbb ccc", Whitespace::NORMAL, Some(20)), 1);
        assert_eq!(natural_height("aaa\nbbb", Whitespace::NORMAL, None), 2);
    }

    #[test]
    fn width_uses_normalized_text() {
        assert_eq!(natural_width("  a   b  ", Whitespace::NORMAL), 3);
        assert_eq!(natural_width("  a   b  ", Whitespace::PRESERVE), 9);
        assert_eq!(natural_width("ab\ncd", Whitespace::WRAP_NEVER), 5);
    }
}
