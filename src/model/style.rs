use crossterm::style::Color;

/// Foreground/background colors for a node. Unset channels inherit from the
/// nearest ancestor that sets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    pub const fn new() -> Self {
        Self { fg: None, bg: None }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.fg.is_some() && self.bg.is_some()
    }

    /// Fill unset channels from `parent`.
    pub fn inherit(self, parent: Style) -> Style {
        Style {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_keeps_own_channels() {
        let parent = Style::new().fg(Color::Red).bg(Color::Blue);
        let child = Style::new().fg(Color::Green);
        let merged = child.inherit(parent);
        assert_eq!(merged.fg, Some(Color::Green));
        assert_eq!(merged.bg, Some(Color::Blue));
        assert!(merged.is_complete());
    }
}
