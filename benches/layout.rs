use std::io;

use cellflow::logging::NullSink;
use cellflow::{
    AnsiRenderer, Border, BoxModel, DimensionConstraint, LayoutContext, Logger, NodeId, Padding,
    Rect, RendererSettings, Size, Surface, Tree, Whitespace, paint, plot_root,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const SCREEN: Size = Size::new(160, 48);
const PANELS: usize = 12;
const ROWS_PER_PANEL: usize = 40;

fn plot_wide_tree(c: &mut Criterion) {
    let (tree, root) = build_tree();
    c.bench_function("plot_wide_tree", |b| {
        b.iter(|| {
            tree.reset_subtree(root).expect("reset");
            let mut ctx = quiet_context();
            plot_root(&tree, root, black_box(Rect::from_size(SCREEN)), &mut ctx)
                .expect("plot");
        });
    });
}

fn plot_and_flush(c: &mut Criterion) {
    let (tree, root) = build_tree();
    let mut renderer =
        AnsiRenderer::new(RendererSettings::default()).with_logger(Logger::new(NullSink));
    let mut surface = Surface::new(SCREEN);
    c.bench_function("plot_paint_flush", |b| {
        b.iter(|| {
            tree.reset_subtree(root).expect("reset");
            let mut ctx = quiet_context();
            plot_root(&tree, root, Rect::from_size(SCREEN), &mut ctx).expect("plot");
            surface.clear();
            paint(&tree, root, &mut surface, &ctx).expect("paint");
            renderer.invalidate();
            let mut sink = io::sink();
            renderer.render(&mut sink, black_box(&surface)).expect("render");
        });
    });
}

fn quiet_context() -> LayoutContext {
    LayoutContext::new().with_logger(Logger::new(NullSink))
}

/// A header line above a row of bordered percent-width panels, each
/// holding wrapped text rows.
fn build_tree() -> (Tree, NodeId) {
    let tree = Tree::new();
    let root = tree.create(BoxModel::block());
    tree.add_child(
        root,
        BoxModel::block()
            .with_height(DimensionConstraint::fixed(1))
            .with_text("cellflow benchmark"),
    )
    .expect("header");
    let body = tree.add_child(root, BoxModel::block()).expect("body");

    for panel in 0..PANELS {
        let column = tree
            .add_child(
                body,
                BoxModel::inline_block()
                    .with_width(DimensionConstraint::percent((100 / PANELS) as u8))
                    .with_height(DimensionConstraint::percent(100))
                    .with_border(Border::rounded())
                    .with_padding(Padding::symmetric(0, 1)),
            )
            .expect("panel");
        for row in 0..ROWS_PER_PANEL {
            tree.add_child(
                column,
                BoxModel::block()
                    .with_whitespace(Whitespace::NORMAL)
                    .with_text(format!("panel {panel} row {row} with a few words to wrap")),
            )
            .expect("row");
        }
    }
    (tree, root)
}

criterion_group!(benches, plot_wide_tree, plot_and_flush);
criterion_main!(benches);
