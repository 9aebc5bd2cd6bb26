//! Layout resolver.
//!
//! [`plot`] assigns outer bounds to a node and its subtree, top-down and
//! depth-first. A node whose bounds are already non-empty is left alone, so
//! applications force re-layout by resetting bounds (see
//! [`Tree::reset_subtree`](crate::tree::Tree::reset_subtree)).
//!
//! Mutating a subtree's structure while it is being plotted is not
//! supported; callers serialise layout with their own structural edits.

mod context;
mod core;
mod sizing;

pub use context::LayoutContext;
pub use core::{plot, plot_root};
pub use sizing::{natural_height, natural_width, resolve_height, resolve_width, rows};
