//! Text measurement, wrapping and alignment for leaf content.
//!
//! Wrapping always happens before alignment: [`format_text`] reflows content
//! to a rectangle's width according to the node's [`Whitespace`] mode, then
//! pads it into the rectangle according to its [`Alignment`].

mod align;
mod measure;
mod wrap;

pub use align::{align_lines, align_string};
pub use measure::{natural_height, natural_width};
pub use wrap::{normalize, word_wrap, wrap_lines};

use crate::geometry::Rect;
use crate::model::{Alignment, Whitespace};

/// Wrap `content` to `bounds.dx()` and align it inside `bounds`.
pub fn format_text(
    content: &str,
    bounds: Rect,
    whitespace: Whitespace,
    alignment: Alignment,
) -> Vec<String> {
    if bounds.is_empty() {
        return Vec::new();
    }
    let lines = wrap_lines(content, bounds.dx(), whitespace);
    align_lines(lines, bounds.dx(), bounds.dy(), alignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_then_aligns() {
        let bounds = Rect::from_origin(0, 0, 5, 3);
        let lines = format_text(
            "aa bb",
            Rect::from_origin(0, 0, 4, 3),
            Whitespace::NORMAL,
            Alignment::RIGHT | Alignment::BOTTOM,
        );
        assert_eq!(lines, vec!["    ", "  aa", "  bb"]);

        let never = format_text("aa bb cc", bounds, Whitespace::WRAP_NEVER, Alignment::AUTO);
        assert_eq!(never, vec!["aa bb cc", "     ", "     "]);
    }

    #[test]
    fn empty_bounds_draw_nothing() {
        let lines = format_text("text", Rect::EMPTY, Whitespace::NORMAL, Alignment::AUTO);
        assert!(lines.is_empty());
    }
}
