/// A cell coordinate on the terminal grid. `x` grows right, `y` grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Half-open rectangle `[min, max)` on the terminal grid.
///
/// A rectangle with no area is "empty"; the layout resolver treats an empty
/// rectangle as "not yet resolved".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        min: Point::new(0, 0),
        max: Point::new(0, 0),
    };

    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle with the given origin and extent.
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + width, y + height),
        }
    }

    /// Screen-sized rectangle anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::from_origin(0, 0, size.width as i32, size.height as i32)
    }

    pub fn dx(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn dy(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn top_left(&self) -> Point {
        self.min
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }

    /// True when `other` lies entirely inside `self`. Empty rectangles are
    /// contained by everything.
    pub fn contains(&self, other: &Rect) -> bool {
        other.is_empty()
            || (self.min.x <= other.min.x
                && other.max.x <= self.max.x
                && self.min.y <= other.min.y
                && other.max.y <= self.max.y)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.min.x <= point.x && point.x < self.max.x && self.min.y <= point.y && point.y < self.max.y
    }

    /// Shrink each edge independently. Insets larger than the rectangle
    /// collapse the affected axis to zero extent instead of inverting it.
    pub fn inset(&self, top: i32, right: i32, bottom: i32, left: i32) -> Rect {
        let min_x = self.min.x + left;
        let min_y = self.min.y + top;
        let max_x = (self.max.x - right).max(min_x);
        let max_y = (self.max.y - bottom).max(min_y);
        Rect::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Move by the given offset, keeping the extent.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            Point::new(self.min.x + dx, self.min.y + dy),
            Point::new(self.max.x + dx, self.max.y + dy),
        )
    }

    pub fn intersect(&self, other: &Rect) -> Rect {
        overlap(self, other)
    }

    /// Smallest rectangle covering both. Empty inputs are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::new(
            Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }
}

/// Intersection of two rectangles, or [`Rect::EMPTY`] when they do not
/// overlap.
pub fn overlap(a: &Rect, b: &Rect) -> Rect {
    let clipped = Rect::new(
        Point::new(a.min.x.max(b.min.x), a.min.y.max(b.min.y)),
        Point::new(a.max.x.min(b.max.x), a.max.y.min(b.max.y)),
    );
    if clipped.is_empty() {
        Rect::EMPTY
    } else {
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_collapses_instead_of_inverting() {
        let rect = Rect::from_origin(0, 0, 2, 2);
        let inner = rect.inset(1, 2, 1, 2);
        assert!(inner.is_empty());
        assert_eq!(inner.dx(), 0);
        assert_eq!(inner.dy(), 0);
    }

    #[test]
    fn overlap_of_disjoint_rects_is_empty() {
        let a = Rect::from_origin(0, 0, 4, 4);
        let b = Rect::from_origin(10, 10, 4, 4);
        assert_eq!(overlap(&a, &b), Rect::EMPTY);
        assert_eq!(
            overlap(&a, &Rect::from_origin(2, 1, 10, 10)),
            Rect::from_origin(2, 1, 2, 3)
        );
    }

    #[test]
    fn containment_edges() {
        let outer = Rect::from_origin(0, 0, 80, 24);
        assert!(outer.contains(&Rect::from_origin(0, 5, 80, 19)));
        assert!(!outer.contains(&Rect::from_origin(0, 5, 80, 20)));
        assert!(outer.contains(&Rect::EMPTY));
        assert!(outer.contains_point(Point::new(79, 23)));
        assert!(!outer.contains_point(Point::new(80, 0)));
    }

    #[test]
    fn union_ignores_empty() {
        let a = Rect::from_origin(1, 1, 2, 2);
        assert_eq!(a.union(&Rect::EMPTY), a);
        assert_eq!(
            a.union(&Rect::from_origin(5, 0, 1, 1)),
            Rect::new(Point::new(1, 0), Point::new(6, 3))
        );
    }
}
