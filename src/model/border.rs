use crate::width::display_width;

/// Border glyphs for each edge and corner. An empty glyph means the edge is
/// absent and takes no space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Border {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl Border {
    /// Build a border from `[top, bottom, left, right, top_left, top_right,
    /// bottom_left, bottom_right]`.
    pub fn from_glyphs(glyphs: [&str; 8]) -> Self {
        let [top, bottom, left, right, top_left, top_right, bottom_left, bottom_right] = glyphs;
        Self {
            top: top.to_string(),
            bottom: bottom.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            top_left: top_left.to_string(),
            top_right: top_right.to_string(),
            bottom_left: bottom_left.to_string(),
            bottom_right: bottom_right.to_string(),
        }
    }

    pub fn single() -> Self {
        Self::from_glyphs(["─", "─", "│", "│", "┌", "┐", "└", "┘"])
    }

    pub fn double() -> Self {
        Self::from_glyphs(["═", "═", "║", "║", "╔", "╗", "╚", "╝"])
    }

    pub fn rounded() -> Self {
        Self::from_glyphs(["─", "─", "│", "│", "╭", "╮", "╰", "╯"])
    }

    pub fn heavy() -> Self {
        Self::from_glyphs(["━", "━", "┃", "┃", "┏", "┓", "┗", "┛"])
    }

    pub fn ascii() -> Self {
        Self::from_glyphs(["-", "-", "|", "|", "+", "+", "+", "+"])
    }

    /// Cells consumed on the left edge: the widest of the left-side glyphs.
    pub fn left_cells(&self) -> i32 {
        widest(&[&self.left, &self.top_left, &self.bottom_left])
    }

    pub fn right_cells(&self) -> i32 {
        widest(&[&self.right, &self.top_right, &self.bottom_right])
    }

    /// Lines consumed on the top edge (0 or 1).
    pub fn top_lines(&self) -> i32 {
        present(&[&self.top, &self.top_left, &self.top_right])
    }

    pub fn bottom_lines(&self) -> i32 {
        present(&[&self.bottom, &self.bottom_left, &self.bottom_right])
    }

    pub fn horizontal_cells(&self) -> i32 {
        self.left_cells() + self.right_cells()
    }

    pub fn vertical_cells(&self) -> i32 {
        self.top_lines() + self.bottom_lines()
    }
}

fn widest(glyphs: &[&String]) -> i32 {
    glyphs
        .iter()
        .map(|glyph| display_width(glyph))
        .max()
        .unwrap_or(0) as i32
}

fn present(glyphs: &[&String]) -> i32 {
    i32::from(glyphs.iter().any(|glyph| !glyph.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_border_takes_one_cell_per_edge() {
        let border = Border::single();
        assert_eq!(border.horizontal_cells(), 2);
        assert_eq!(border.vertical_cells(), 2);
    }

    #[test]
    fn missing_edges_take_no_space() {
        let border = Border::from_glyphs(["─", "", "", "│", "", "┐", "", ""]);
        assert_eq!(border.left_cells(), 0);
        assert_eq!(border.right_cells(), 1);
        assert_eq!(border.top_lines(), 1);
        assert_eq!(border.bottom_lines(), 0);
    }

    #[test]
    fn wide_corner_glyph_widens_its_side() {
        let mut border = Border::ascii();
        border.top_left = "██".to_string();
        assert_eq!(border.left_cells(), 2);
        assert_eq!(border.horizontal_cells(), 3);
    }
}
