use crossterm::style::Color;

use crate::geometry::{Point, Rect, Size, overlap};
use crate::model::Style;
use crate::width::char_width;

/// One terminal cell. A wide glyph stores its symbol in the first cell and
/// leaves the cells it covers with an empty symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: None,
            bg: None,
        }
    }
}

impl Cell {
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    fn apply(&mut self, style: Style) {
        if style.fg.is_some() {
            self.fg = style.fg;
        }
        if style.bg.is_some() {
            self.bg = style.bg;
        }
    }
}

/// In-memory cell grid the painter draws into and the renderer flushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    area: Rect,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(size: Size) -> Self {
        let area = Rect::from_size(size);
        let len = size.width as usize * size.height as usize;
        Self {
            area,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> usize {
        self.area.dx() as usize
    }

    pub fn height(&self) -> usize {
        self.area.dy() as usize
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width();
        let start = (y * width).min(self.cells.len());
        let end = (start + width).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Symbols of one row joined together, continuation cells skipped.
    pub fn row_text(&self, y: usize) -> String {
        self.row(y)
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    /// Blank `rect` (clipped to the surface) and paint it with `style`.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let clipped = overlap(&rect, &self.area);
        for y in clipped.min.y..clipped.max.y {
            for x in clipped.min.x..clipped.max.x {
                if let Some(idx) = self.index(x, y) {
                    let cell = &mut self.cells[idx];
                    cell.symbol = " ".to_string();
                    cell.apply(style);
                }
            }
        }
    }

    /// Write `text` starting at `origin`, clipped against `clip` and the
    /// surface. A glyph that would straddle the clip edge is dropped.
    /// Returns the number of cells covered.
    pub fn set_string(&mut self, origin: Point, text: &str, style: Style, clip: Rect) -> usize {
        let clip = overlap(&clip, &self.area);
        if clip.is_empty() || origin.y < clip.min.y || origin.y >= clip.max.y {
            return 0;
        }

        let mut x = origin.x;
        let mut covered = 0;
        for ch in text.chars() {
            let width = char_width(ch) as i32;
            if width == 0 {
                continue;
            }
            if x + width > clip.max.x {
                break;
            }
            if x >= clip.min.x {
                self.put(x, origin.y, ch, width, style);
                covered += width as usize;
            }
            x += width;
        }
        covered
    }

    fn put(&mut self, x: i32, y: i32, ch: char, width: i32, style: Style) {
        if let Some(idx) = self.index(x, y) {
            let cell = &mut self.cells[idx];
            cell.symbol = ch.to_string();
            cell.apply(style);
        }
        for offset in 1..width {
            if let Some(idx) = self.index(x + offset, y) {
                let cell = &mut self.cells[idx];
                cell.symbol.clear();
                cell.apply(style);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.area.contains_point(Point::new(x, y)) {
            return None;
        }
        Some(y as usize * self.width() + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_clipped() {
        let mut surface = Surface::new(Size::new(6, 2));
        let clip = Rect::from_origin(1, 0, 3, 1);
        let covered = surface.set_string(Point::new(0, 0), "abcdef", Style::new(), clip);
        assert_eq!(covered, 3);
        assert_eq!(surface.row_text(0), " bcd  ");

        // Rows outside the clip are untouched.
        assert_eq!(surface.set_string(Point::new(0, 1), "zz", Style::new(), clip), 0);
        assert_eq!(surface.row_text(1), "      ");
    }

    #[test]
    fn wide_glyphs_cover_continuation_cells() {
        let mut surface = Surface::new(Size::new(5, 1));
        surface.set_string(Point::new(0, 0), "日本語", Style::new(), surface.area());
        assert_eq!(surface.get(0, 0).unwrap().symbol, "日");
        assert!(surface.get(1, 0).unwrap().is_continuation());
        assert_eq!(surface.get(2, 0).unwrap().symbol, "本");
        // The third glyph would straddle the edge.
        assert_eq!(surface.get(4, 0).unwrap().symbol, " ");
    }

    #[test]
    fn fill_keeps_unset_channels() {
        let mut surface = Surface::new(Size::new(3, 3));
        surface.fill(surface.area(), Style::new().fg(Color::White));
        surface.fill(Rect::from_origin(1, 1, 5, 5), Style::new().bg(Color::Blue));
        let corner = surface.get(2, 2).unwrap();
        assert_eq!(corner.fg, Some(Color::White));
        assert_eq!(corner.bg, Some(Color::Blue));
        assert_eq!(surface.get(0, 0).unwrap().bg, None);
        assert!(surface.get(3, 3).is_none());
    }
}
