//! Flushes a recorded canvas into PDF bytes.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::canvas::{Canvas, DrawCommand};
use crate::config::{PageGeometry, ReportConfig, Rgb};
use crate::error::Error;
use crate::fonts::{FontFace, to_winansi_bytes};

/// Control-point factor for quarter circles drawn as cubic Béziers.
const KAPPA: f32 = 0.552_284_8;

/// Entries for the document information dictionary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub producer: String,
}

/// Encodes every page of `canvas`, converting top-down coordinates to PDF
/// user space and stamping the folio when the geometry asks for it.
pub fn render(canvas: &Canvas, config: &ReportConfig, metadata: &DocumentMetadata) -> Result<Vec<u8>, Error> {
    let n = canvas.page_count();
    if n == 0 {
        return Err(Error::EmptyDocument);
    }
    let geometry = &config.geometry;

    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();
    let font_refs: Vec<(FontFace, Ref)> = FontFace::ALL.iter().map(|&face| (face, alloc())).collect();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (face, font_ref) in &font_refs {
        pdf.type1_font(*font_ref)
            .base_font(Name(face.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (i, page) in canvas.pages().iter().enumerate() {
        let mut content = Content::new();
        for command in &page.commands {
            draw_command(&mut content, geometry, command);
        }
        if geometry.folio {
            stamp_folio(&mut content, config, i + 1, n);
        }
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, geometry.page_width, geometry.page_height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for (face, font_ref) in &font_refs {
            fonts.pair(Name(face.resource_name().as_bytes()), *font_ref);
        }
    }

    pdf.document_info(info_id)
        .title(TextStr(&metadata.title))
        .author(TextStr(&metadata.author))
        .subject(TextStr(&metadata.subject))
        .producer(TextStr(&metadata.producer));

    log::debug!("encoded {n} page(s)");
    Ok(pdf.finish())
}

fn set_fill(content: &mut Content, color: Rgb) {
    let (r, g, b) = color.to_unit();
    content.set_fill_rgb(r, g, b);
}

fn draw_command(content: &mut Content, geometry: &PageGeometry, command: &DrawCommand) {
    let flip = |y: f32| geometry.page_height - y;
    match command {
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            set_fill(content, *color);
            content.rect(*x, flip(y + height), *width, *height);
            content.fill_nonzero();
        }
        DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        } => {
            let (r, g, b) = color.to_unit();
            content.set_stroke_rgb(r, g, b);
            content.set_line_width(*line_width);
            content.rect(*x, flip(y + height), *width, *height);
            content.stroke();
        }
        DrawCommand::FillPill {
            x,
            y,
            width,
            height,
            color,
        } => {
            set_fill(content, *color);
            pill_path(content, *x, flip(y + height), *width, *height);
            content.fill_nonzero();
        }
        DrawCommand::Text {
            x,
            y,
            text,
            face,
            size,
            color,
        } => show_text(content, *x, flip(*y), text, *face, *size, *color),
    }
}

fn show_text(content: &mut Content, x: f32, pdf_y: f32, text: &str, face: FontFace, size: f32, color: Rgb) {
    let bytes = to_winansi_bytes(text);
    if bytes.is_empty() {
        return;
    }
    set_fill(content, color);
    content.begin_text();
    content.set_font(Name(face.resource_name().as_bytes()), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, pdf_y]);
    content.show(Str(&bytes));
    content.end_text();
}

/// Rectangle with semicircular ends, in PDF coordinates (`y` is the bottom edge).
fn pill_path(content: &mut Content, x: f32, y: f32, width: f32, height: f32) {
    let r = (height / 2.0).min(width / 2.0);
    let k = r * KAPPA;
    let (left, right) = (x, x + width);
    let (bottom, top) = (y, y + height);

    content.move_to(left + r, bottom);
    content.line_to(right - r, bottom);
    content.cubic_to(right - r + k, bottom, right, bottom + r - k, right, bottom + r);
    content.line_to(right, top - r);
    content.cubic_to(right, top - r + k, right - r + k, top, right - r, top);
    content.line_to(left + r, top);
    content.cubic_to(left + r - k, top, left, top - r + k, left, top - r);
    content.line_to(left, bottom + r);
    content.cubic_to(left, bottom + r - k, left + r - k, bottom, left + r, bottom);
    content.close_path();
}

/// "Page X of Y", centred in the bottom margin.
pub fn folio_text(page: usize, total: usize) -> String {
    format!("Page {page} of {total}")
}

fn stamp_folio(content: &mut Content, config: &ReportConfig, page: usize, total: usize) {
    let geometry = &config.geometry;
    let size = geometry.small_size;
    let label = folio_text(page, total);
    let width = FontFace::Regular.text_width(&label, size);
    let x = (geometry.page_width - width) / 2.0;
    let baseline = geometry.margin_bottom / 2.0 - size * 0.35;
    show_text(content, x, baseline, &label, FontFace::Regular, size, config.theme.muted);
}
