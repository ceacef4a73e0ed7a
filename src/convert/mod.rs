//! Conversion boundary: JSON bytes in, PDF bytes out.
//!
//! This module ties the pipeline together and carries the host-facing
//! conventions: recognized property names for configuration, the output
//! MIME type, and the filename rewrite applied on success.
//!
//! # Example
//!
//! ```
//! use json2pdf::convert::{convert_bytes, ConvertOptions};
//!
//! fn main() -> json2pdf::Result<()> {
//!     let result = convert_bytes(br#"{"name": "Jo"}"#, &ConvertOptions::default())?;
//!     assert_eq!(result.mime_type, "application/pdf");
//!     assert_eq!(result.page_count, 1);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::format_value;
use crate::layout::{paginate, LayoutOptions};
use crate::render;

/// MIME type of the conversion output.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Recognized property name for the document title.
pub const PROP_TITLE: &str = "PDF Title";

/// Recognized property name for the body font size.
pub const PROP_FONT_SIZE: &str = "Font Size";

/// Recognized property name for key-prefix rendering.
pub const PROP_INCLUDE_KEYS: &str = "Include Keys";

/// Options for a single conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// Layout options (title, font size, page geometry)
    pub layout: LayoutOptions,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set layout options.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Build options from host-supplied string properties.
    ///
    /// Recognizes `PDF Title`, `Font Size`, and `Include Keys`; any other
    /// property name is ignored. Values are validated before the pipeline
    /// runs: the title must be non-empty, the font size a positive integer,
    /// and include-keys a case-insensitive `true` or `false`.
    ///
    /// # Example
    ///
    /// ```
    /// use json2pdf::ConvertOptions;
    ///
    /// let options = ConvertOptions::from_properties([
    ///     ("PDF Title", "Inventory Report"),
    ///     ("Font Size", "10"),
    ///     ("Include Keys", "false"),
    /// ])?;
    ///
    /// assert_eq!(options.layout.title, "Inventory Report");
    /// assert_eq!(options.layout.font_size, 10);
    /// assert!(!options.layout.include_keys);
    /// # Ok::<(), json2pdf::Error>(())
    /// ```
    pub fn from_properties<'a, I>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut layout = LayoutOptions::default();
        for (name, value) in properties {
            match name {
                PROP_TITLE => {
                    if value.trim().is_empty() {
                        return Err(Error::EmptyTitle);
                    }
                    layout.title = value.to_string();
                }
                PROP_FONT_SIZE => {
                    layout.font_size = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|size| *size > 0)
                        .ok_or_else(|| Error::InvalidFontSize(value.to_string()))?;
                }
                PROP_INCLUDE_KEYS => {
                    layout.include_keys = parse_boolean(value)
                        .ok_or_else(|| Error::InvalidIncludeKeys(value.to_string()))?;
                }
                // hosts attach arbitrary attributes; unrecognized names
                // are not an error
                _ => {}
            }
        }
        Ok(Self { layout })
    }
}

/// Parse a case-insensitive boolean token.
fn parse_boolean(value: &str) -> Option<bool> {
    let token = value.trim();
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The PDF document bytes
    pub data: Vec<u8>,

    /// MIME type of the output (`application/pdf`)
    pub mime_type: &'static str,

    /// Number of pages in the document
    pub page_count: usize,

    /// Number of formatted text lines across all pages
    pub line_count: usize,
}

impl ConvertResult {
    /// Get output length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the output is empty (never the case on success).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Convert a JSON document to PDF bytes.
///
/// A parse failure aborts the conversion before any output is produced, so
/// the caller's input is never answered with a partial document.
pub fn convert_bytes(data: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
    let value: Value = serde_json::from_slice(data)?;
    Ok(convert_value(&value, options))
}

/// Convert an already-parsed JSON value to PDF bytes.
///
/// Infallible: formatting, pagination, and serialization are total over
/// parsed trees.
pub fn convert_value(value: &Value, options: &ConvertOptions) -> ConvertResult {
    let lines = format_value(value, options.layout.include_keys);
    let pages = paginate(&lines, &options.layout);
    let data = render::to_pdf(&pages, &options.layout);

    log::debug!(
        "converted {} lines onto {} pages ({} bytes)",
        lines.len(),
        pages.len(),
        data.len()
    );

    ConvertResult {
        data,
        mime_type: PDF_MIME_TYPE,
        page_count: pages.len(),
        line_count: lines.len(),
    }
}

/// Convert a JSON file on disk to PDF bytes.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    let data = std::fs::read(path)?;
    convert_bytes(&data, options)
}

/// Rewrite a `.json` or `.txt` filename suffix to `.pdf`.
///
/// The match is case-insensitive; names without one of those suffixes are
/// returned unchanged.
pub fn output_filename(name: &str) -> String {
    for suffix in [".json", ".txt"] {
        if let Some(stem) = strip_suffix_ignore_case(name, suffix) {
            return format!("{stem}.pdf");
        }
    }
    name.to_string()
}

/// Strip an ASCII suffix without regard to case.
fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let stem_len = name.len().checked_sub(suffix.len())?;
    // not a char boundary means the tail cannot be an ASCII suffix
    let stem = name.get(..stem_len)?;
    name[stem_len..]
        .eq_ignore_ascii_case(suffix)
        .then_some(stem)
}
