//! Page-level types.

use serde::{Deserialize, Serialize};

/// A text fragment placed at an absolute position on a page.
///
/// Coordinates follow the PDF convention: origin at the bottom-left corner
/// of the page, y growing upward, one unit equal to one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Text to draw, with indentation already applied
    pub text: String,

    /// Horizontal position in points from the left page edge
    pub x: f32,

    /// Baseline position in points from the bottom page edge
    pub y: f32,

    /// Font size in points
    pub font_size: f32,

    /// Whether the text is drawn with the bold face
    pub bold: bool,
}

impl Placement {
    /// Create a body text placement.
    pub fn body(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            bold: false,
        }
    }

    /// Create a bold title placement.
    pub fn title(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            bold: true,
        }
    }
}

/// A single page of laid-out text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Placements in the order they are drawn, top to bottom
    pub placements: Vec<Placement>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            placements: Vec::new(),
        }
    }

    /// Add a placement to the page.
    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Get plain text content of the page, top to bottom.
    pub fn plain_text(&self) -> String {
        self.placements
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page is empty (no placements).
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Get the number of placements on the page, title included.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Get the number of body (non-bold) placements on the page.
    pub fn body_count(&self) -> usize {
        self.placements.iter().filter(|p| !p.bold).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(1);
        assert_eq!(page.number, 1);
        assert!(page.is_empty());
        assert_eq!(page.placement_count(), 0);
    }

    #[test]
    fn test_placement_kinds() {
        let title = Placement::title("Report", 50.0, 742.0, 14.0);
        assert!(title.bold);

        let body = Placement::body("name: Jo", 50.0, 642.0, 12.0);
        assert!(!body.bold);
        assert_eq!(body.y, 642.0);
    }

    #[test]
    fn test_body_count_excludes_title() {
        let mut page = Page::new(1);
        page.add_placement(Placement::title("Report", 50.0, 742.0, 14.0));
        page.add_placement(Placement::body("a: 1", 50.0, 642.0, 12.0));
        page.add_placement(Placement::body("b: 2", 50.0, 626.0, 12.0));

        assert_eq!(page.placement_count(), 3);
        assert_eq!(page.body_count(), 2);
    }

    #[test]
    fn test_plain_text() {
        let mut page = Page::new(1);
        page.add_placement(Placement::title("Report", 50.0, 742.0, 14.0));
        page.add_placement(Placement::body("a: 1", 50.0, 642.0, 12.0));

        assert_eq!(page.plain_text(), "Report\na: 1");
    }
}
