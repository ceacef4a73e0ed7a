//! Layout model types for JSON to PDF conversion.
//!
//! This module defines the intermediate representations that bridge the
//! pipeline stages: formatted [`Line`]s between the formatter and the
//! paginator, and [`Page`]s of positioned [`Placement`]s between the
//! paginator and the PDF writer.

mod line;
mod page;

pub use line::Line;
pub use page::{Page, Placement};
