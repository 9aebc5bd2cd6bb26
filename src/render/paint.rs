use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Rect};
use crate::layout::LayoutContext;
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::model::{Border, Style};
use crate::text;
use crate::tree::{NodeId, Plottable, Tree};
use crate::width::display_width;

use super::surface::Surface;

pub(crate) const PAINT_TARGET: &str = "render::paint";

/// Draw `root` and its subtree into `surface` using the bounds from the last
/// layout pass. Returns the number of nodes that drew anything.
pub fn paint(tree: &Tree, root: NodeId, surface: &mut Surface, ctx: &LayoutContext) -> Result<usize> {
    let node = tree.node(root).ok_or(LayoutError::NodeNotFound(root))?;
    let painted = paint_node(&node, surface, ctx);
    Ok(painted)
}

fn paint_node<N: Plottable>(node: &N, surface: &mut Surface, ctx: &LayoutContext) -> usize {
    let bounds = node.bounds();
    let mut painted = 0;

    if !bounds.is_empty() {
        let style = node.computed_style();
        surface.fill(bounds, style);
        if let Some(border) = node.border() {
            draw_border(surface, &border, bounds, style);
        }
        if let Some(content) = node.text_content() {
            draw_text(node, &content, surface, style);
        }
        painted += 1;

        if ctx.config().trace {
            if let Some(logger) = ctx.logger() {
                let _ = logger.log_event(event_with_fields(
                    LogLevel::Trace,
                    PAINT_TARGET,
                    "node.painted",
                    [
                        json_kv("node", node.node_id().to_string()),
                        json_kv("x", bounds.min.x),
                        json_kv("y", bounds.min.y),
                    ],
                ));
            }
        }
    }

    for child in node.children() {
        painted += paint_node(&child, surface, ctx);
    }
    painted
}

fn draw_text<N: Plottable>(node: &N, content: &str, surface: &mut Surface, style: Style) {
    let inner = node.inner_bounds();
    if inner.is_empty() {
        return;
    }
    let lines = text::format_text(content, inner, node.whitespace(), node.alignment());
    for (row, line) in lines.iter().take(inner.dy() as usize).enumerate() {
        let origin = Point::new(inner.min.x, inner.min.y + row as i32);
        surface.set_string(origin, line, style, inner);
    }
}

fn draw_border(surface: &mut Surface, border: &Border, bounds: Rect, style: Style) {
    let left = border.left_cells();
    let right = border.right_cells();
    let right_x = bounds.max.x - right;

    if border.top_lines() > 0 {
        draw_edge(
            surface,
            bounds,
            bounds.min.y,
            [&border.top_left, &border.top, &border.top_right],
            [left, right_x],
            style,
        );
    }
    if border.bottom_lines() > 0 && bounds.dy() > border.top_lines() {
        draw_edge(
            surface,
            bounds,
            bounds.max.y - 1,
            [&border.bottom_left, &border.bottom, &border.bottom_right],
            [left, right_x],
            style,
        );
    }

    let first = bounds.min.y + border.top_lines();
    let last = bounds.max.y - border.bottom_lines();
    for y in first..last {
        surface.set_string(Point::new(bounds.min.x, y), &border.left, style, bounds);
        if right > 0 {
            surface.set_string(Point::new(right_x, y), &border.right, style, bounds);
        }
    }
}

/// One horizontal edge: corner, repeated fill glyph, corner.
fn draw_edge(
    surface: &mut Surface,
    bounds: Rect,
    y: i32,
    [start, fill, end]: [&String; 3],
    [left, right_x]: [i32; 2],
    style: Style,
) {
    surface.set_string(Point::new(bounds.min.x, y), start, style, bounds);

    let fill_width = display_width(fill) as i32;
    if fill_width > 0 {
        let mut x = bounds.min.x + left;
        while x + fill_width <= right_x {
            surface.set_string(Point::new(x, y), fill, style, bounds);
            x += fill_width;
        }
    }

    if right_x > bounds.min.x {
        surface.set_string(Point::new(right_x, y), end, style, bounds);
    }
}
