/// Sizing rule for one axis of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DimensionConstraint {
    /// Size comes from content or the remaining space in the row.
    #[default]
    None,
    /// Fixed size in terminal cells (or lines), excluding border and padding.
    Fixed(i32),
    /// Percentage (0-100) of the available space.
    Percent(u8),
}

impl DimensionConstraint {
    /// Create a `Fixed` constraint. Negative sizes are clamped to zero.
    pub fn fixed(n: i32) -> Self {
        Self::Fixed(n.max(0))
    }

    /// Create a `Percent` constraint.
    ///
    /// # Panics
    /// Panics if `p` is greater than 100.
    pub fn percent(p: u8) -> Self {
        assert!(p <= 100, "Percent must be 0-100");
        Self::Percent(p)
    }

    /// Same constraint with the constructor bounds enforced: fixed sizes
    /// at least 0, percentages at most 100. Variants built directly may
    /// carry anything.
    pub fn normalized(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Fixed(n) => Self::Fixed(n.max(0)),
            Self::Percent(p) => Self::Percent(p.min(100)),
        }
    }

    /// Resolve against the available extent.
    pub fn apply(&self, available: i32) -> i32 {
        match self.normalized() {
            Self::None => available,
            Self::Fixed(n) => n.min(available),
            Self::Percent(p) => available * i32::from(p) / 100,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn fixed_value(&self) -> Option<i32> {
        match self.normalized() {
            Self::Fixed(n) => Some(n),
            _ => None,
        }
    }

    pub fn percent_value(&self) -> Option<u8> {
        match self.normalized() {
            Self::Percent(p) => Some(p),
            _ => None,
        }
    }
}
