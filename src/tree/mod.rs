//! Arena-backed node tree.
//!
//! Nodes live in a [`Tree`] and are addressed by [`NodeId`]. Parent links
//! are plain ids, so the tree holds no ownership cycles. Each node guards
//! its links and its box model with its own reader/writer lock; there is no
//! lock spanning the whole tree.

mod core;
mod extensions;
mod traits;

pub use core::{NodeId, Tree};
pub use extensions::{ExtensionError, Extensions};
pub use traits::{HasBounds, HasConstraints, HasStyle, HasText, HasTree, NodeRef, Plottable};
