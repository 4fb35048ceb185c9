//! PDF sheet generation.
//!
//! Generates minimal but valid PDF 1.4 files using raw PDF construction and
//! the built-in Helvetica faces, so no font files are required. A sheet is a
//! title banner repeated at the top of every page, a series of titled
//! sections with wrapped body text, and a dated footer. Text is encoded as
//! Latin-1 under `WinAnsiEncoding`; anything outside that range is rejected
//! with [`EncodeError`].

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::fonts::{EncodeError, Font, PT_PER_MM, pdf_string};

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Non-stroking colour operator (`rg`).
    fn fill_op(self) -> String {
        format!(
            "{:.3} {:.3} {:.3} rg",
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0
        )
    }
}

/// Face used for a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    Regular,
    /// Emphasized, e.g. for quotations.
    Italic,
}

impl BodyStyle {
    fn font(self) -> Font {
        match self {
            BodyStyle::Regular => Font::Regular,
            BodyStyle::Italic => Font::Italic,
        }
    }
}

/// A titled block of plain text. Newlines in `body` start new paragraphs.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub body: &'a str,
    pub style: BodyStyle,
}

/// Everything that goes on a sheet apart from the footer date.
#[derive(Debug, Clone)]
pub struct Sheet<'a> {
    pub title: &'a str,
    pub sections: Vec<Section<'a>>,
}

/// Page geometry and typography. Lengths are millimetres, font sizes points.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Left, top and right margin.
    pub margin: f64,
    /// Distance from the bottom edge at which content breaks to a new page.
    pub break_margin: f64,
    /// Horizontal padding inside each cell.
    pub cell_padding: f64,

    pub title_size: f64,
    pub title_fill: Rgb,
    pub title_height: f64,
    pub title_advance: f64,

    pub heading_size: f64,
    pub heading_fill: Rgb,
    pub heading_height: f64,
    pub heading_advance: f64,

    pub body_size: f64,
    pub line_height: f64,
    /// Space added after each section body.
    pub body_gap: f64,

    pub footer_size: f64,
    pub footer_color: Rgb,
    /// Distance of the footer cell's top edge from the bottom of the page.
    pub footer_offset: f64,
    pub footer_height: f64,
}

impl Default for SheetLayout {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 10.0,
            break_margin: 15.0,
            cell_padding: 1.0,
            title_size: 16.0,
            title_fill: Rgb(230, 240, 255),
            title_height: 12.0,
            title_advance: 14.0,
            heading_size: 12.0,
            heading_fill: Rgb(210, 225, 255),
            heading_height: 8.0,
            heading_advance: 9.0,
            body_size: 11.0,
            line_height: 6.0,
            body_gap: 1.0,
            footer_size: 9.0,
            footer_color: Rgb(120, 120, 120),
            footer_offset: 15.0,
            footer_height: 10.0,
        }
    }
}

impl SheetLayout {
    fn cell_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Usable width for wrapped text.
    pub fn text_width(&self) -> f64 {
        self.cell_width() - 2.0 * self.cell_padding
    }
}

/// Render `sheet` to PDF bytes with a `Generated YYYY-MM-DD` footer.
pub fn render_sheet(
    sheet: &Sheet<'_>,
    layout: &SheetLayout,
    generated: NaiveDate,
) -> Result<Vec<u8>> {
    let footer = format!("Generated {}", generated.format("%Y-%m-%d"));
    let mut writer = PageWriter::new(layout, sheet.title, &footer);

    writer.start_page()?;
    for section in &sheet.sections {
        writer.section_title(section.heading)?;
        writer.paragraphs(section.body, section.style.font())?;
        writer.y += layout.body_gap;
    }
    let pages = writer.finish()?;
    debug!("Laid out {} page(s) for '{}'", pages.len(), sheet.title);

    Ok(PdfBuilder::new(layout).build(sheet.title, &pages)?)
}

// ---------------------------------------------------------------------------
// Line wrapping
// ---------------------------------------------------------------------------

/// One output line of wrapped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Set when the line was broken at a space and should be stretched to
    /// the full width.
    pub justify: bool,
}

/// Wrap `text` to `max_width` millimetres.
///
/// Each `\n` starts a new paragraph and a single trailing newline is ignored.
/// Paragraphs break at the last space that fits; a word longer than the
/// line is split between characters. Leading indentation is kept.
pub fn wrap_text(text: &str, font: Font, size_pt: f64, max_width: f64) -> Vec<Line> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let max_units = max_width * PT_PER_MM * 1000.0 / size_pt;

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, font, max_units, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, font: Font, max_units: f64, lines: &mut Vec<Line>) {
    let chars: Vec<char> = paragraph.chars().collect();
    let emitted = lines.len();

    let mut start = 0;
    let mut i = 0;
    let mut last_space: Option<usize> = None;
    let mut width = 0.0;

    while i < chars.len() {
        let c = chars[i];
        if c == ' ' {
            last_space = Some(i);
        }
        width += f64::from(font.glyph_width(c));

        if width > max_units {
            match last_space {
                Some(space) if space > start => {
                    lines.push(Line {
                        text: chars[start..space].iter().collect(),
                        justify: true,
                    });
                    start = space + 1;
                }
                _ => {
                    let end = if i == start { i + 1 } else { i };
                    lines.push(Line {
                        text: chars[start..end].iter().collect(),
                        justify: false,
                    });
                    start = end;
                }
            }
            i = start;
            last_space = None;
            width = 0.0;
            continue;
        }
        i += 1;
    }

    if start < chars.len() || lines.len() == emitted {
        lines.push(Line {
            text: chars[start..].iter().collect(),
            justify: false,
        });
    }
}

// ---------------------------------------------------------------------------
// Page layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// A full-width box at the current margin.
struct Cell<'t> {
    y: f64,
    height: f64,
    text: &'t str,
    font: Font,
    size: f64,
    align: Align,
    fill: Option<Rgb>,
    color: Rgb,
    /// Extra space per word gap, in points.
    word_spacing: f64,
}

/// Accumulates content streams page by page, top-down.
struct PageWriter<'a> {
    layout: &'a SheetLayout,
    title: &'a str,
    footer: &'a str,
    pages: Vec<String>,
    content: String,
    /// Cursor, in millimetres from the top edge.
    y: f64,
}

impl<'a> PageWriter<'a> {
    fn new(layout: &'a SheetLayout, title: &'a str, footer: &'a str) -> Self {
        Self {
            layout,
            title,
            footer,
            pages: Vec::new(),
            content: String::new(),
            y: layout.margin,
        }
    }

    fn start_page(&mut self) -> Result<(), EncodeError> {
        let layout = self.layout;
        self.y = layout.margin;
        self.cell(Cell {
            y: self.y,
            height: layout.title_height,
            text: self.title,
            font: Font::Bold,
            size: layout.title_size,
            align: Align::Center,
            fill: Some(layout.title_fill),
            color: Rgb::BLACK,
            word_spacing: 0.0,
        })?;
        self.y += layout.title_advance;
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), EncodeError> {
        let layout = self.layout;
        self.cell(Cell {
            y: layout.page_height - layout.footer_offset,
            height: layout.footer_height,
            text: self.footer,
            font: Font::Regular,
            size: layout.footer_size,
            align: Align::Right,
            fill: None,
            color: layout.footer_color,
            word_spacing: 0.0,
        })?;
        self.pages.push(std::mem::take(&mut self.content));
        Ok(())
    }

    /// Break to a new page if a block of `height` would cross the break line.
    fn ensure_room(&mut self, height: f64) -> Result<(), EncodeError> {
        if self.y + height > self.layout.page_height - self.layout.break_margin {
            self.end_page()?;
            self.start_page()?;
        }
        Ok(())
    }

    fn section_title(&mut self, text: &str) -> Result<(), EncodeError> {
        let layout = self.layout;
        self.ensure_room(layout.heading_height)?;
        self.cell(Cell {
            y: self.y,
            height: layout.heading_height,
            text,
            font: Font::Bold,
            size: layout.heading_size,
            align: Align::Left,
            fill: Some(layout.heading_fill),
            color: Rgb::BLACK,
            word_spacing: 0.0,
        })?;
        self.y += layout.heading_advance;
        Ok(())
    }

    fn paragraphs(&mut self, text: &str, font: Font) -> Result<(), EncodeError> {
        let layout = self.layout;
        let max_width = layout.text_width();

        for line in wrap_text(text, font, layout.body_size, max_width) {
            self.ensure_room(layout.line_height)?;
            let word_spacing = if line.justify {
                justify_spacing(&line.text, font, layout.body_size, max_width)
            } else {
                0.0
            };
            self.cell(Cell {
                y: self.y,
                height: layout.line_height,
                text: &line.text,
                font,
                size: layout.body_size,
                align: Align::Left,
                fill: None,
                color: Rgb::BLACK,
                word_spacing,
            })?;
            self.y += layout.line_height;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<String>, EncodeError> {
        self.end_page()?;
        Ok(self.pages)
    }

    fn cell(&mut self, cell: Cell<'_>) -> Result<(), EncodeError> {
        let layout = self.layout;
        let x = layout.margin;
        let width = layout.cell_width();
        let literal = pdf_string(cell.text)?;

        if let Some(fill) = cell.fill {
            let bottom = layout.page_height - (cell.y + cell.height);
            self.content.push_str(&format!(
                "q {} {} {} {} {} re f Q\n",
                fill.fill_op(),
                pt(x),
                pt(bottom),
                pt(width),
                pt(cell.height)
            ));
        }

        if cell.text.is_empty() {
            return Ok(());
        }

        let text_width = cell.font.text_width(cell.text, cell.size);
        let tx = match cell.align {
            Align::Left => x + layout.cell_padding,
            Align::Center => x + (width - text_width) / 2.0,
            Align::Right => x + width - layout.cell_padding - text_width,
        };
        // Vertically centred baseline
        let baseline = cell.y + 0.5 * cell.height + 0.3 * cell.size / PT_PER_MM;
        let ty = layout.page_height - baseline;

        self.content.push_str(&format!(
            "q {} BT /{} {} Tf ",
            cell.color.fill_op(),
            cell.font.resource_name(),
            num(cell.size)
        ));
        if cell.word_spacing > 0.0 {
            self.content.push_str(&format!("{:.3} Tw ", cell.word_spacing));
        }
        self.content.push_str(&format!(
            "{} {} Td {} Tj ET Q\n",
            pt(tx),
            pt(ty),
            literal
        ));
        Ok(())
    }
}

/// Word spacing in points that stretches `text` to `max_width` millimetres.
fn justify_spacing(text: &str, font: Font, size_pt: f64, max_width: f64) -> f64 {
    let gaps = text.chars().filter(|c| *c == ' ').count();
    if gaps == 0 {
        return 0.0;
    }
    let slack = max_width - font.text_width(text, size_pt);
    (slack * PT_PER_MM / gaps as f64).max(0.0)
}

fn pt(mm: f64) -> String {
    num(mm * PT_PER_MM)
}

fn num(value: f64) -> String {
    format!("{value:.2}")
}

// ---------------------------------------------------------------------------
// File assembly
// ---------------------------------------------------------------------------

/// Minimal PDF file builder. Constructs valid PDF 1.4 files.
///
/// Object layout: 1 catalog, 2 page tree, 3-5 fonts, 6 info, then a page
/// object and its content stream for each page.
struct PdfBuilder {
    media_box: String,
}

const FIRST_PAGE_OBJECT: usize = 7;

impl PdfBuilder {
    fn new(layout: &SheetLayout) -> Self {
        Self {
            media_box: format!(
                "[0 0 {} {}]",
                pt(layout.page_width),
                pt(layout.page_height)
            ),
        }
    }

    /// Build the complete PDF file as bytes.
    fn build(&self, title: &str, pages: &[String]) -> Result<Vec<u8>, EncodeError> {
        let page_ids: Vec<usize> = (0..pages.len())
            .map(|i| FIRST_PAGE_OBJECT + 2 * i)
            .collect();

        let font_refs: Vec<String> = Font::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| format!("/{} {} 0 R", font.resource_name(), 3 + i))
            .collect();
        let resources = format!("<< /Font << {} >> >>", font_refs.join(" "));

        let mut objects: Vec<String> = Vec::with_capacity(6 + 2 * pages.len());

        // 1: Catalog
        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());

        // 2: Pages
        let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ));

        // 3-5: Fonts
        for font in Font::ALL {
            objects.push(format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            ));
        }

        // 6: Info
        objects.push(format!(
            "<< /Title {} /Producer (press_docs) >>",
            pdf_string(title)?
        ));

        for (page_id, stream) in page_ids.iter().zip(pages) {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox {} /Resources {} /Contents {} 0 R >>",
                self.media_box,
                resources,
                page_id + 1
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                stream.len(),
                stream
            ));
        }

        let mut pdf = String::new();
        pdf.push_str("%PDF-1.4\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        // Cross-reference table
        let xref_offset = pdf.len();
        let num_objects = offsets.len() + 1; // +1 for free entry
        pdf.push_str(&format!("xref\n0 {num_objects}\n"));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }

        // Trailer
        pdf.push_str(&format!(
            "trailer\n<< /Size {num_objects} /Root 1 0 R /Info 6 0 R >>\n"
        ));
        pdf.push_str(&format!("startxref\n{xref_offset}\n%%EOF\n"));

        Ok(pdf.into_bytes())
    }
}
