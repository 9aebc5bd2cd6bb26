//! Box-model state carried by every layout-participating node.
//!
//! The resolver in [`crate::layout`] reads these types; applications set
//! them before each pass.

mod border;
mod constraint;
mod core;
mod flags;
mod style;

pub use border::Border;
pub use constraint::DimensionConstraint;
pub use core::{BoxModel, Padding};
pub use flags::{Alignment, Display, Whitespace};
pub use style::Style;
