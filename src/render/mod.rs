//! PDF serialization of laid-out pages.
//!
//! Writes one PDF page object and one content stream per layout page, using
//! the Standard-14 Helvetica faces so no font data is embedded. Content
//! streams are left uncompressed.

use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::layout::LayoutOptions;
use crate::model::Page;

/// Resource name of the regular body font.
const FONT_REGULAR: Name<'static> = Name(b"F1");

/// Resource name of the bold title font.
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Serialize laid-out pages into a complete PDF document.
///
/// Purely in-memory and infallible: every placement is drawn as a single
/// text object at its recorded position.
pub fn to_pdf(pages: &[Page], options: &LayoutOptions) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let regular_id = alloc.bump();
    let bold_id = alloc.bump();
    let info_id = alloc.bump();

    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();

    let mut pdf = Pdf::new();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    for ((page, &page_id), &content_id) in pages.iter().zip(&page_ids).zip(&content_ids) {
        let mut pdf_page = pdf.page(page_id);
        pdf_page
            .media_box(Rect::new(0.0, 0.0, options.page_width, options.page_height))
            .parent(page_tree_id)
            .contents(content_id);
        pdf_page
            .resources()
            .fonts()
            .pair(FONT_REGULAR, regular_id)
            .pair(FONT_BOLD, bold_id);
        pdf_page.finish();

        let content = render_page(page);
        pdf.stream(content_id, &content.finish());
    }

    write_document_info(&mut pdf, info_id, options);

    log::debug!("serialized {} pages", pages.len());
    pdf.finish()
}

/// Build the content stream for one page: one text object per placement.
fn render_page(page: &Page) -> Content {
    let mut content = Content::new();
    for placement in &page.placements {
        let font = if placement.bold { FONT_BOLD } else { FONT_REGULAR };
        content
            .begin_text()
            .set_font(font, placement.font_size)
            .next_line(placement.x, placement.y)
            .show(Str(placement.text.as_bytes()))
            .end_text();
    }
    content
}

/// Write the document information dictionary.
fn write_document_info(pdf: &mut Pdf, info_id: Ref, options: &LayoutOptions) {
    let now = Utc::now();
    let date = Date::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8);

    pdf.document_info(info_id)
        .title(TextStr(&options.title))
        .producer(TextStr(concat!("json2pdf ", env!("CARGO_PKG_VERSION"))))
        .creation_date(date);
}
