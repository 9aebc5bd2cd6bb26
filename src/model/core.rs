use crate::geometry::{Point, Rect};

use super::{Alignment, Border, DimensionConstraint, Display, Style, Whitespace};

/// Padding in cells (left/right) and lines (top/bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(n: i32) -> Self {
        Self::new(n, n, n, n)
    }

    /// `vertical` lines top and bottom, `horizontal` cells left and right.
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Per-node layout state: constraints set by the application and the
/// bounds written by the resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxModel {
    /// Resolved outer rectangle; empty until a layout pass computes it.
    pub bounds: Rect,
    /// Fixed anchor that bypasses flow positioning.
    pub absolute_position: Option<Point>,
    pub border: Option<Border>,
    pub padding: Padding,
    pub width: DimensionConstraint,
    pub height: DimensionConstraint,
    pub min_width: i32,
    pub min_height: i32,
    pub display: Display,
    pub alignment: Alignment,
    pub whitespace: Whitespace,
    pub style: Style,
    text: Option<String>,
}

impl BoxModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block() -> Self {
        Self::new().with_display(Display::Block)
    }

    pub fn inline_block() -> Self {
        Self::new().with_display(Display::InlineBlock)
    }

    /// Inline leaf carrying `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().with_text(text)
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn with_width(mut self, width: DimensionConstraint) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: DimensionConstraint) -> Self {
        self.height = height;
        self
    }

    pub fn with_min_size(mut self, min_width: i32, min_height: i32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_absolute_position(mut self, anchor: Point) -> Self {
        self.absolute_position = Some(anchor);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Replace the leaf text content.
    ///
    /// # Panics
    /// Panics if the text carries ANSI escape sequences. Content must be raw;
    /// colors belong in [`Style`].
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        assert!(
            !text.contains('\x1b'),
            "text content must be unstyled (found escape sequence)"
        );
        self.text = Some(text);
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Padding plus border cells on the horizontal axis.
    pub fn horizontal_space(&self) -> i32 {
        self.padding.horizontal() + self.border.as_ref().map_or(0, Border::horizontal_cells)
    }

    /// Padding plus border lines on the vertical axis.
    pub fn vertical_space(&self) -> i32 {
        self.padding.vertical() + self.border.as_ref().map_or(0, Border::vertical_cells)
    }

    /// Outer bounds minus border, then minus padding. May be empty.
    pub fn inner_bounds(&self) -> Rect {
        let framed = match self.border.as_ref() {
            Some(border) => self.bounds.inset(
                border.top_lines(),
                border.right_cells(),
                border.bottom_lines(),
                border.left_cells(),
            ),
            None => self.bounds,
        };
        framed.inset(
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
            self.padding.left,
        )
    }
}
