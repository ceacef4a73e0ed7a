//! # json2pdf
//!
//! Convert JSON documents into paginated, human-readable PDF files.
//!
//! The conversion runs as three deterministic stages:
//!
//! 1. **Format**: flatten the parsed JSON tree into indented text lines,
//!    one scalar value or container label per line.
//! 2. **Paginate**: lay the lines onto fixed-size pages, opening a new page
//!    whenever the vertical cursor drops below the bottom margin.
//! 3. **Render**: serialize the pages into PDF bytes using the Standard-14
//!    Helvetica faces.
//!
//! ## Quick Start
//!
//! ```
//! use json2pdf::{convert_str, ConvertOptions};
//!
//! fn main() -> json2pdf::Result<()> {
//!     let json = r#"{"name": "John Doe", "age": 30}"#;
//!     let result = convert_str(json, &ConvertOptions::default())?;
//!
//!     assert!(result.data.starts_with(b"%PDF-"));
//!     assert_eq!(result.mime_type, "application/pdf");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure-preserving output**: object keys and array indices become
//!   `key: ` and `[i]: ` prefixes, nested two spaces per level
//! - **Document-order fields**: objects render in insertion order
//! - **Automatic pagination**: Letter and A4 geometry with a bold title on
//!   the first page
//! - **Host-friendly configuration**: string properties validated up front
//! - **No font embedding**: Standard-14 Helvetica keeps output small

pub mod convert;
pub mod error;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_bytes, convert_file, convert_value, output_filename, ConvertOptions, ConvertResult,
    PDF_MIME_TYPE,
};
pub use error::{Error, Result};
pub use format::format_value;
pub use layout::{paginate, LayoutOptions, DEFAULT_FONT_SIZE, DEFAULT_TITLE};
pub use model::{Line, Page, Placement};

use std::path::Path;

/// Convert a JSON string to PDF bytes.
///
/// # Example
///
/// ```
/// use json2pdf::{convert_str, ConvertOptions};
///
/// let result = convert_str(r#"[1, 2, 3]"#, &ConvertOptions::default()).unwrap();
/// assert_eq!(result.line_count, 3);
/// ```
pub fn convert_str(json: &str, options: &ConvertOptions) -> Result<ConvertResult> {
    convert::convert_bytes(json.as_bytes(), options)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```
/// use json2pdf::Json2Pdf;
///
/// let result = Json2Pdf::new()
///     .with_title("Inventory Report")
///     .with_font_size(10)
///     .include_keys(false)
///     .convert_str(r#"{"sku": "a-1", "count": 4}"#)?;
///
/// assert_eq!(result.line_count, 2);
/// # Ok::<(), json2pdf::Error>(())
/// ```
pub struct Json2Pdf {
    options: ConvertOptions,
}

impl Json2Pdf {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.layout = self.options.layout.with_title(title);
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.options.layout = self.options.layout.with_font_size(font_size);
        self
    }

    /// Include or omit key and index prefixes.
    pub fn include_keys(mut self, include: bool) -> Self {
        self.options.layout = self.options.layout.include_keys(include);
        self
    }

    /// Set the page dimensions in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.options.layout = self.options.layout.with_page_size(width, height);
        self
    }

    /// Use standard A4 page geometry.
    pub fn a4(mut self) -> Self {
        self.options.layout = self.options.layout.a4();
        self
    }

    /// Convert a JSON string.
    pub fn convert_str(&self, json: &str) -> Result<ConvertResult> {
        convert::convert_bytes(json.as_bytes(), &self.options)
    }

    /// Convert JSON bytes.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<ConvertResult> {
        convert::convert_bytes(data, &self.options)
    }

    /// Convert an already-parsed JSON value.
    pub fn convert_value(&self, value: &serde_json::Value) -> ConvertResult {
        convert::convert_value(value, &self.options)
    }

    /// Convert a JSON file on disk.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConvertResult> {
        convert::convert_file(path, &self.options)
    }

    /// Get the configured options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl Default for Json2Pdf {
    fn default() -> Self {
        Self::new()
    }
}
