//! Terminal display width helpers.
//!
//! Layout measures content in cells, so every width in the crate goes
//! through these helpers rather than `str::len`.

mod utils;

pub use utils::{char_width, display_width, line_count, widest_line};
