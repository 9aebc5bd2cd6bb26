//! Cell-grid box layout for terminal interfaces.
//!
//! Applications build a [`Tree`] of nodes, each carrying a [`BoxModel`]
//! (display mode, width/height constraints, padding, border, text, style).
//! [`plot_root`] resolves every node's outer bounds top-down against the
//! screen rectangle; [`paint`] draws the resolved tree into a [`Surface`]
//! and [`AnsiRenderer`] flushes that surface to a terminal.
//!
//! ```no_run
//! use cellflow::{BoxModel, DimensionConstraint, LayoutContext, Rect, Tree, plot_root};
//!
//! let tree = Tree::new();
//! let root = tree.create(BoxModel::block());
//! tree.add_child(root, BoxModel::block().with_height(DimensionConstraint::fixed(5)))?;
//! tree.add_child(root, BoxModel::block().with_height(DimensionConstraint::percent(100)))?;
//!
//! let mut ctx = LayoutContext::new();
//! plot_root(&tree, root, Rect::from_origin(0, 0, 80, 24), &mut ctx)?;
//! # Ok::<(), cellflow::LayoutError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod render;
pub mod text;
pub mod tree;
pub mod width;

pub use config::{LayoutConfig, OverflowPolicy, RendererSettings};
pub use error::{LayoutError, Result};
pub use geometry::{Point, Rect, Size, overlap};
pub use layout::{LayoutContext, plot, plot_root};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use model::{Alignment, Border, BoxModel, DimensionConstraint, Display, Padding, Style, Whitespace};
pub use render::{AnsiRenderer, Cell, Surface, paint};
pub use tree::{NodeId, NodeRef, Plottable, Tree};
pub use width::display_width;
