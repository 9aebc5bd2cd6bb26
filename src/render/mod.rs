//! Painting resolved trees into a cell [`Surface`] and flushing it to a
//! terminal as ANSI sequences.

mod ansi;
mod paint;
mod surface;

pub use ansi::AnsiRenderer;
pub use paint::paint;
pub use surface::{Cell, Surface};
