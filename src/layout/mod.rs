//! Page layout.
//!
//! Turns the formatter's line sequence into pages of positioned text. The
//! geometry lives in [`LayoutOptions`]; [`paginate`] applies it.

mod options;
mod paginate;

pub use options::{LayoutOptions, DEFAULT_FONT_SIZE, DEFAULT_TITLE};
pub use paginate::paginate;
