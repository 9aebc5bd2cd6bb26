use crate::config::{LayoutConfig, OverflowPolicy};
use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Rect, overlap};
use crate::logging::{LogLevel, json_kv};
use crate::metrics::MetricSnapshot;
use crate::tree::{NodeId, Plottable, Tree};

use super::context::{LayoutContext, PLOT_TARGET};
use super::sizing::{resolve_height, resolve_width};

/// Lay out one frame starting at `root`, then emit a `pass.completed`
/// record with the accumulated counters.
pub fn plot_root(
    tree: &Tree,
    root: NodeId,
    screen: Rect,
    ctx: &mut LayoutContext,
) -> Result<MetricSnapshot> {
    let node = tree.node(root).ok_or(LayoutError::NodeNotFound(root))?;
    ctx.metrics_mut().record_pass();
    plot(&node, screen, ctx);

    let snapshot = ctx.metrics().snapshot();
    if let Some(logger) = ctx.logger() {
        let _ = logger.log_event(snapshot.to_log_event(PLOT_TARGET));
    }
    Ok(snapshot)
}

/// Resolve `node`'s outer bounds if they are still empty, then recurse into
/// its children with the same `container`.
pub fn plot<N: Plottable>(node: &N, container: Rect, ctx: &mut LayoutContext) {
    if node.bounds().is_empty() {
        resolve(node, &container, ctx);
    } else {
        ctx.metrics_mut().record_skipped();
        ctx.trace(
            "plot.skipped",
            [json_kv("node", node.node_id().to_string())],
        );
    }

    for child in node.children() {
        plot(&child, container, ctx);
    }
}

fn resolve<N: Plottable>(node: &N, container: &Rect, ctx: &mut LayoutContext) {
    let origin = anchor(node, container);
    let width = resolve_width(node, container).min(container.dx().max(0));
    let height = resolve_height(node, container).min(container.dy().max(0));
    let computed = Rect::from_origin(origin.x, origin.y, width, height);

    let fitted = contain(computed, container, ctx.config());
    if fitted.reset {
        ctx.metrics_mut().record_overflow_reset();
        ctx.log(
            LogLevel::Debug,
            "plot.overflow_reset",
            [
                json_kv("node", node.node_id().to_string()),
                json_kv("width", computed.dx()),
                json_kv("height", computed.dy()),
            ],
        );
    }
    if fitted.clipped {
        ctx.metrics_mut().record_clipped();
        ctx.trace(
            "plot.clipped",
            [
                json_kv("node", node.node_id().to_string()),
                json_kv("lost_width", computed.dx() - fitted.bounds.dx()),
                json_kv("lost_height", computed.dy() - fitted.bounds.dy()),
            ],
        );
    }

    node.set_bounds(fitted.bounds);
    ctx.metrics_mut().record_plotted();
    ctx.trace(
        "plot.resolved",
        [
            json_kv("node", node.node_id().to_string()),
            json_kv("x", fitted.bounds.min.x),
            json_kv("y", fitted.bounds.min.y),
            json_kv("width", fitted.bounds.dx()),
            json_kv("height", fitted.bounds.dy()),
        ],
    );
}

/// Top-left corner of a node before sizing.
///
/// Blocks start at the parent's inner left edge below every earlier
/// sibling; other nodes continue the current line to the right of their
/// previous sibling.
fn anchor<N: Plottable>(node: &N, container: &Rect) -> Point {
    if let Some(position) = node.absolute_position() {
        return position;
    }

    let origin = match node.parent() {
        Some(parent) => parent.inner_bounds().top_left(),
        None => container.top_left(),
    };
    let block = node.display().is_block();
    let previous = node.previous_sibling();

    let mut anchor = match previous.as_ref() {
        Some(sibling) if !block => sibling.bounds().top_right(),
        _ => origin,
    };
    if block {
        anchor.y = next_line_y(node, origin.y);
    } else if let Some(sibling) = previous.as_ref() {
        anchor.y = sibling.bounds().min.y;
    }
    anchor
}

/// Lowest bottom edge among all earlier siblings, or `top` when there are
/// none.
fn next_line_y<N: Plottable>(node: &N, top: i32) -> i32 {
    node.previous_siblings()
        .iter()
        .map(|sibling| sibling.bounds().max.y)
        .fold(top, i32::max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Contained {
    bounds: Rect,
    reset: bool,
    clipped: bool,
}

/// Fit resolved bounds into the container.
///
/// An axis larger than the container is reset to the container's extents.
/// Under [`OverflowPolicy::Translate`] an axis that fits in size but hangs
/// over an edge is shifted back inside. Finally the bounds are clipped to
/// the container when configured.
fn contain(bounds: Rect, container: &Rect, config: &LayoutConfig) -> Contained {
    let mut fitted = Contained {
        bounds,
        reset: false,
        clipped: false,
    };
    if container.contains(&bounds) {
        return fitted;
    }

    if bounds.dx() > container.dx() {
        fitted.bounds.min.x = container.min.x;
        fitted.bounds.max.x = container.max.x;
        fitted.reset = true;
    } else if config.overflow == OverflowPolicy::Translate {
        let shift = edge_shift(bounds.min.x, bounds.max.x, container.min.x, container.max.x);
        fitted.bounds = fitted.bounds.translate(shift, 0);
    }

    if bounds.dy() > container.dy() {
        fitted.bounds.min.y = container.min.y;
        fitted.bounds.max.y = container.max.y;
        fitted.reset = true;
    } else if config.overflow == OverflowPolicy::Translate {
        let shift = edge_shift(bounds.min.y, bounds.max.y, container.min.y, container.max.y);
        fitted.bounds = fitted.bounds.translate(0, shift);
    }

    if config.clip_to_container && !container.contains(&fitted.bounds) {
        fitted.bounds = overlap(&fitted.bounds, container);
        fitted.clipped = true;
    }
    fitted
}

fn edge_shift(min: i32, max: i32, lo: i32, hi: i32) -> i32 {
    if max > hi {
        hi - max
    } else if min < lo {
        lo - min
    } else {
        0
    }
}
