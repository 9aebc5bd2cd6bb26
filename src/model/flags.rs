use bitflags::bitflags;

/// Flow behaviour of a node among its siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    /// Flows with siblings at its natural content size.
    #[default]
    Inline,
    /// Starts a new row and takes the remaining row width by default.
    Block,
    /// Flows with siblings but honours explicit size constraints.
    InlineBlock,
}

impl Display {
    pub fn is_block(self) -> bool {
        matches!(self, Self::Block)
    }

    pub fn is_inline(self) -> bool {
        matches!(self, Self::Inline)
    }
}

bitflags! {
    /// Text alignment inside a node's inner bounds.
    ///
    /// One horizontal and one vertical flag may be combined. An axis with no
    /// flag set is `auto`, which behaves as left/top.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Alignment: u8 {
        const LEFT = 1 << 0;
        const CENTER = 1 << 1;
        const RIGHT = 1 << 2;
        const TOP = 1 << 3;
        const MIDDLE = 1 << 4;
        const BOTTOM = 1 << 5;
    }
}

impl Alignment {
    pub const AUTO: Alignment = Alignment::empty();
    pub const HORIZONTAL: Alignment = Alignment::LEFT
        .union(Alignment::CENTER)
        .union(Alignment::RIGHT);
    pub const VERTICAL: Alignment = Alignment::TOP
        .union(Alignment::MIDDLE)
        .union(Alignment::BOTTOM);
}

bitflags! {
    /// Whitespace and wrapping behaviour for text content.
    ///
    /// The empty set is `normal`: runs of spaces collapse and long lines
    /// word-wrap to the available width.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Whitespace: u8 {
        /// Keep runs of spaces and leading/trailing blanks as written.
        const PRESERVE = 1 << 0;
        /// Never wrap; the node is exactly one line tall.
        const WRAP_NEVER = 1 << 1;
        /// Break only at explicit newlines.
        const WRAP_LINE = 1 << 2;
    }
}

impl Whitespace {
    pub const NORMAL: Whitespace = Whitespace::empty();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_axes_partition_flags() {
        let align = Alignment::CENTER | Alignment::BOTTOM;
        assert_eq!(align & Alignment::HORIZONTAL, Alignment::CENTER);
        assert_eq!(align & Alignment::VERTICAL, Alignment::BOTTOM);
        assert!(Alignment::AUTO.is_empty());
    }

    #[test]
    fn display_predicates() {
        assert!(Display::Block.is_block());
        assert!(!Display::InlineBlock.is_block());
        assert!(Display::default().is_inline());
    }
}
