//! Width and height resolution.
//!
//! Every function here returns outer extents (border and padding included)
//! unless its name says "natural", which measures content only.

use crate::geometry::Rect;
use crate::model::DimensionConstraint;
use crate::text;
use crate::tree::Plottable;

/// Outer width of `node` before the container clamp.
pub fn resolve_width<N: Plottable>(node: &N, container: &Rect) -> i32 {
    let own = node.horizontal_space();
    let width = match node.parent() {
        None => root_extent(node.bounds().dx(), container.dx()),
        Some(parent) => {
            let available = parent.inner_bounds().dx();
            let display = node.display();
            match node.width_constraint() {
                _ if display.is_inline() => available.min(natural_width(node) + own),
                DimensionConstraint::Fixed(fixed) => available.min(fixed + own),
                DimensionConstraint::Percent(_) => percent_width(node, available),
                DimensionConstraint::None if display.is_block() || ends_row(node) => {
                    remaining_width(node, available)
                }
                DimensionConstraint::None => available.min(natural_width(node) + own),
            }
        }
    };
    width.max(node.min_width()).max(0)
}

/// Outer height of `node`.
///
/// Content heights reflow text to the parent's inner width, and only when
/// the text is wider than that.
pub fn resolve_height<N: Plottable>(node: &N, container: &Rect) -> i32 {
    let own = node.vertical_space();
    let height = match node.parent() {
        None => root_extent(node.bounds().dy(), container.dy()),
        Some(parent) => {
            let inner = parent.inner_bounds();
            let available = inner.dy();
            let display = node.display();
            let wrap_width = Some(inner.dx());
            match node.height_constraint() {
                _ if display.is_inline() => available.min(natural_height(node, wrap_width) + own),
                DimensionConstraint::Fixed(fixed) => available.min(fixed + own),
                DimensionConstraint::Percent(_) => percent_height(node, &parent),
                DimensionConstraint::None if node.text_content().is_some() => {
                    available.min(natural_height(node, wrap_width) + own)
                }
                DimensionConstraint::None if display.is_block() || ends_row(node) => {
                    remaining_height(node, &parent)
                }
                DimensionConstraint::None => available.min(natural_height(node, wrap_width) + own),
            }
        }
    };
    height.max(node.min_height()).max(0)
}

/// Content width: the widest text line, or for containers the widest row
/// of children at their natural or fixed widths.
pub fn natural_width<N: Plottable>(node: &N) -> i32 {
    if let Some(content) = node.text_content() {
        return text::natural_width(&content, node.whitespace());
    }
    rows(node.children())
        .iter()
        .map(|row| row.iter().map(natural_outer_width).sum::<i32>())
        .max()
        .unwrap_or(0)
}

/// Content height: text lines (reflowed to `wrap_width` where the
/// whitespace mode allows), or for containers the stacked row heights.
pub fn natural_height<N: Plottable>(node: &N, wrap_width: Option<i32>) -> i32 {
    if let Some(content) = node.text_content() {
        return text::natural_height(&content, node.whitespace(), wrap_width);
    }
    rows(node.children())
        .iter()
        .map(|row| row_height(row, wrap_width))
        .sum()
}

/// Group siblings into rows. A block sibling starts a new row and the
/// following non-block siblings flow after it.
pub fn rows<N: Plottable>(siblings: Vec<N>) -> Vec<Vec<N>> {
    let mut rows: Vec<Vec<N>> = Vec::new();
    for sibling in siblings {
        match rows.last_mut() {
            Some(row) if !sibling.display().is_block() => row.push(sibling),
            _ => rows.push(vec![sibling]),
        }
    }
    rows
}

/// The other members of `node`'s row, in document order.
fn row_siblings<N: Plottable>(node: &N) -> Vec<N> {
    let mut row = Vec::new();
    if !node.display().is_block() {
        for sibling in node.previous_siblings().into_iter().rev() {
            let starts_row = sibling.display().is_block();
            row.push(sibling);
            if starts_row {
                break;
            }
        }
        row.reverse();
    }
    row.extend(following_in_row(node));
    row
}

fn following_in_row<N: Plottable>(node: &N) -> Vec<N> {
    node.following_siblings()
        .into_iter()
        .take_while(|sibling| !sibling.display().is_block())
        .collect()
}

/// True when nothing else flows after `node` on its row.
fn ends_row<N: Plottable>(node: &N) -> bool {
    node.next_sibling()
        .is_none_or(|next| next.display().is_block())
}

/// Horizontal space a sibling is known to take regardless of its content.
fn reserved_width<N: Plottable>(sibling: &N) -> i32 {
    let fixed = if sibling.display().is_inline() {
        0
    } else {
        sibling.width_constraint().fixed_value().unwrap_or(0)
    };
    sibling.horizontal_space() + fixed
}

fn remaining_width<N: Plottable>(node: &N, available: i32) -> i32 {
    available
        - following_in_row(node)
            .iter()
            .map(reserved_width)
            .sum::<i32>()
}

fn percent_width<N: Plottable>(node: &N, available: i32) -> i32 {
    let reserved: i32 = row_siblings(node).iter().map(reserved_width).sum();
    let row_available = (available - reserved).max(0);
    let width = node.width_constraint().apply(row_available) + node.horizontal_space();
    // Integer division leaves the run a cell short of the edge otherwise.
    if node.next_sibling().is_none() {
        width - 1
    } else {
        width
    }
}

fn natural_outer_width<N: Plottable>(node: &N) -> i32 {
    let content = match node.width_constraint() {
        DimensionConstraint::Fixed(fixed) if !node.display().is_inline() => fixed,
        _ => natural_width(node),
    };
    content + node.horizontal_space()
}

/// Vertical space a sibling is known to take: its fixed height, or its
/// content height. Percent-sized siblings reserve only their spacing.
fn reserved_height<N: Plottable>(sibling: &N, available_width: Option<i32>) -> i32 {
    let own = sibling.vertical_space();
    if sibling.display().is_inline() {
        return natural_height(sibling, available_width) + own;
    }
    match sibling.height_constraint() {
        DimensionConstraint::Fixed(fixed) => fixed + own,
        DimensionConstraint::Percent(_) => own,
        DimensionConstraint::None => natural_height(sibling, available_width) + own,
    }
}

fn row_height<N: Plottable>(row: &[N], available_width: Option<i32>) -> i32 {
    row.iter()
        .map(|member| reserved_height(member, available_width))
        .max()
        .unwrap_or(0)
}

/// Rows of `parent`'s children split around the row holding `node`.
fn rows_around<N: Plottable>(node: &N, parent: &N) -> (Vec<Vec<N>>, Vec<Vec<N>>) {
    let id = node.node_id();
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut seen = false;
    for row in rows(parent.children()) {
        if row.iter().any(|member| member.node_id() == id) {
            seen = true;
        } else if seen {
            after.push(row);
        } else {
            before.push(row);
        }
    }
    (before, after)
}

fn percent_height<N: Plottable>(node: &N, parent: &N) -> i32 {
    let inner = parent.inner_bounds();
    let (before, _) = rows_around(node, parent);
    let used: i32 = before
        .iter()
        .map(|row| row_height(row, Some(inner.dx())))
        .sum();
    let remaining = (inner.dy() - used).max(0);
    let height = node.height_constraint().apply(remaining) + node.vertical_space();
    // The last percent sibling stretches to the bottom edge instead.
    if node.next_sibling().is_none() {
        height + 1
    } else {
        height
    }
}

fn remaining_height<N: Plottable>(node: &N, parent: &N) -> i32 {
    let inner = parent.inner_bounds();
    let (before, after) = rows_around(node, parent);
    let used: i32 = before
        .iter()
        .chain(after.iter())
        .map(|row| row_height(row, Some(inner.dx())))
        .sum();
    inner.dy() - used
}

/// A root keeps a pinned extent; otherwise it fills the container.
fn root_extent(own: i32, container: i32) -> i32 {
    if own > 0 { own } else { container }
}
