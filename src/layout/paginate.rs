//! Pagination of formatted lines onto fixed-size pages.

use crate::model::{Line, Page, Placement};

use super::LayoutOptions;

/// Average Helvetica glyph advance in em units, used only for the
/// right-edge overflow diagnostic.
const APPROX_GLYPH_ADVANCE_EM: f32 = 0.5;

/// Lay formatted lines out onto pages.
///
/// The title is drawn bold, two points larger than the body, at the top of
/// the first page only. Body lines start below a fixed headroom on the
/// first page and at the title height on every later page, stepping down by
/// the line height. A new page opens whenever the cursor has dropped below
/// the bottom margin. Always produces at least one page, so an empty input
/// yields a title-only document.
///
/// # Example
///
/// ```
/// use json2pdf::{paginate, LayoutOptions, Line};
///
/// let lines = vec![Line::new("name: Jo", 0)];
/// let pages = paginate(&lines, &LayoutOptions::default());
///
/// assert_eq!(pages.len(), 1);
/// // title plus one body line
/// assert_eq!(pages[0].placement_count(), 2);
/// ```
pub fn paginate(lines: &[Line], options: &LayoutOptions) -> Vec<Page> {
    let line_height = options.line_height();
    let body_size = options.font_size as f32;
    let usable_width = options.page_width - options.margin_left;

    let mut pages = Vec::new();
    let mut page = Page::new(1);
    page.add_placement(Placement::title(
        options.title.clone(),
        options.margin_left,
        options.page_height - options.margin_top,
        options.title_font_size(),
    ));

    // First page leaves headroom below the title; continuation pages start
    // at the title line's height.
    let mut cursor = options.page_height - options.margin_top - 50.0;

    for line in lines {
        if cursor < options.margin_bottom {
            log::debug!(
                "page {} full at y {:.0}, starting page {}",
                page.number,
                cursor,
                page.number + 1
            );
            let next_number = page.number + 1;
            pages.push(page);
            page = Page::new(next_number);
            cursor = options.page_height - options.margin_top;
        }

        let text = line.indented_text();
        let approx_width = text.chars().count() as f32 * body_size * APPROX_GLYPH_ADVANCE_EM;
        if approx_width > usable_width {
            log::warn!(
                "page {}: line of {} chars likely overflows the right edge",
                page.number,
                text.chars().count()
            );
        }

        page.add_placement(Placement::body(text, options.margin_left, cursor, body_size));
        cursor -= line_height;
    }

    pages.push(page);
    log::debug!("paginated {} lines onto {} pages", lines.len(), pages.len());

    pages
}
