//! Layout options.

/// Default document title.
pub const DEFAULT_TITLE: &str = "JSON to PDF Conversion";

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Options controlling text layout and page geometry.
///
/// # Example
///
/// ```
/// use json2pdf::LayoutOptions;
///
/// let options = LayoutOptions::new()
///     .with_title("Inventory Report")
///     .with_font_size(10)
///     .a4();
///
/// assert_eq!(options.line_height(), 14.0);
/// assert_eq!(options.page_height, 842.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Document title, drawn bold at the top of the first page
    pub title: String,

    /// Body font size in points
    pub font_size: u32,

    /// Whether to prefix values with their object keys and array indices
    pub include_keys: bool,

    /// Page width in points (1 point = 1/72 inch)
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Left margin in points
    pub margin_left: f32,

    /// Distance in points from the top edge to the title baseline
    pub margin_top: f32,

    /// Bottom margin in points; a new page opens before drawing below it
    pub margin_bottom: f32,
}

impl LayoutOptions {
    /// Create new layout options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Include or omit key and index prefixes.
    pub fn include_keys(mut self, include: bool) -> Self {
        self.include_keys = include;
        self
    }

    /// Set the page dimensions in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Use standard Letter size (8.5 x 11 inches).
    pub fn letter(self) -> Self {
        self.with_page_size(612.0, 792.0)
    }

    /// Use standard A4 size (210 x 297 mm).
    pub fn a4(self) -> Self {
        self.with_page_size(595.0, 842.0)
    }

    /// Vertical distance between consecutive body baselines, in points.
    pub fn line_height(&self) -> f32 {
        self.font_size.saturating_add(4) as f32
    }

    /// Title font size in points.
    pub fn title_font_size(&self) -> f32 {
        self.font_size.saturating_add(2) as f32
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            include_keys: true,
            page_width: 612.0,
            page_height: 792.0,
            margin_left: 50.0,
            margin_top: 50.0,
            margin_bottom: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        assert_eq!(options.title, "JSON to PDF Conversion");
        assert_eq!(options.font_size, 12);
        assert!(options.include_keys);
        assert_eq!(options.page_width, 612.0);
        assert_eq!(options.page_height, 792.0);
    }

    #[test]
    fn test_builder_chain() {
        let options = LayoutOptions::new()
            .with_title("Report")
            .with_font_size(9)
            .include_keys(false)
            .a4();

        assert_eq!(options.title, "Report");
        assert_eq!(options.font_size, 9);
        assert!(!options.include_keys);
        assert_eq!(options.page_width, 595.0);
        assert_eq!(options.page_height, 842.0);
    }

    #[test]
    fn test_derived_metrics() {
        let options = LayoutOptions::new().with_font_size(12);
        assert_eq!(options.line_height(), 16.0);
        assert_eq!(options.title_font_size(), 14.0);
    }

    #[test]
    fn test_extreme_font_size_saturates() {
        let options = LayoutOptions::new().with_font_size(u32::MAX);
        assert_eq!(options.line_height(), u32::MAX as f32);
        assert_eq!(options.title_font_size(), u32::MAX as f32);
    }
}
