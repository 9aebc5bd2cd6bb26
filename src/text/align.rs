use crate::geometry::Rect;
use crate::model::Alignment;
use crate::width::display_width;

/// Align `content` (already wrapped, `\n`-separated) inside `bounds`.
pub fn align_string(content: &str, bounds: Rect, alignment: Alignment) -> Vec<String> {
    let lines = if content.is_empty() {
        Vec::new()
    } else {
        content.split('\n').map(str::to_string).collect()
    };
    align_lines(lines, bounds.dx(), bounds.dy(), alignment)
}

/// Pad `lines` to a `width` x `height` block.
///
/// The vertical pass runs first. Lines wider than `width`, or more lines
/// than `height`, are left for the painter to clip.
pub fn align_lines(
    mut lines: Vec<String>,
    width: i32,
    height: i32,
    alignment: Alignment,
) -> Vec<String> {
    let spare_lines = (height - lines.len() as i32).max(0) as usize;
    let (above, below) = vertical_split(spare_lines, alignment);
    let mut block = Vec::with_capacity(lines.len() + spare_lines);
    block.extend(std::iter::repeat_n(String::new(), above));
    block.append(&mut lines);
    block.extend(std::iter::repeat_n(String::new(), below));

    block
        .into_iter()
        .map(|line| {
            let spare = (width - display_width(&line) as i32).max(0) as usize;
            let (left, right) = horizontal_split(spare, alignment);
            format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
        })
        .collect()
}

/// Blank lines above and below. Middle gives the odd line to the bottom.
fn vertical_split(spare: usize, alignment: Alignment) -> (usize, usize) {
    if alignment.contains(Alignment::MIDDLE) {
        let above = spare / 2;
        (above, spare - above)
    } else if alignment.contains(Alignment::BOTTOM) {
        (spare, 0)
    } else {
        (0, spare)
    }
}

/// Spaces left and right. Center gives the odd cell to the right.
fn horizontal_split(spare: usize, alignment: Alignment) -> (usize, usize) {
    if alignment.contains(Alignment::CENTER) {
        let left = spare / 2;
        (left, spare - left)
    } else if alignment.contains(Alignment::RIGHT) {
        (spare, 0)
    } else {
        (0, spare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_middle_block() {
        let lines = align_string(
            "hi",
            Rect::from_origin(0, 0, 6, 3),
            Alignment::CENTER | Alignment::MIDDLE,
        );
        assert_eq!(lines, vec!["      ", "  hi  ", "      "]);
    }

    #[test]
    fn defaults_to_top_left() {
        let lines = align_string("ab\nc", Rect::from_origin(0, 0, 3, 3), Alignment::AUTO);
        assert_eq!(lines, vec!["ab ", "c  ", "   "]);
    }

    #[test]
    fn odd_remainders() {
        // One spare cell goes right, one spare line goes below.
        let lines = align_string(
            "ab",
            Rect::from_origin(0, 0, 5, 4),
            Alignment::CENTER | Alignment::MIDDLE,
        );
        assert_eq!(lines, vec!["     ", " ab  ", "     ", "     "]);
    }

    #[test]
    fn right_bottom() {
        let lines = align_string(
            "x",
            Rect::from_origin(0, 0, 3, 2),
            Alignment::RIGHT | Alignment::BOTTOM,
        );
        assert_eq!(lines, vec!["   ", "  x"]);
    }

    #[test]
    fn overflow_is_left_in_place() {
        let lines = align_string("abcdef\n2\n3", Rect::from_origin(0, 0, 4, 2), Alignment::CENTER);
        assert_eq!(lines, vec!["abcdef", " 2  ", " 3  "]);
    }
}
