//! lopdf rendering engine.
//!
//! Turns a [`PageLayout`] into the bytes of a single-page PDF using the
//! standard Helvetica faces, so no font files are embedded.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use super::common::encode_win_ansi;
use super::layout::{FontFace, PageLayout};
use super::metrics::MM_PER_PT;
use super::GeneratorError;

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = "GNHS-OPSAS";

/// Stateless engine for rendering page layouts to PDF.
pub struct LopdfRenderEngine;

impl LopdfRenderEngine {
    /// Render `layout` to PDF bytes with `title` in the document info.
    pub fn render(layout: &PageLayout, title: &str) -> Result<Vec<u8>, GeneratorError> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let content = page_content(layout);
        let encoded = content
            .encode()
            .map_err(|e| GeneratorError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_width = to_points(layout.width);
        let page_height = to_points(layout.height);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
            "Producer" => Object::string_literal(PRODUCER),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| GeneratorError::Write(e.to_string()))?;

        log::debug!(
            "Rendered {} text line(s) into {} PDF bytes",
            layout.lines.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}

fn page_content(layout: &PageLayout) -> Content {
    let mut operations = Vec::with_capacity(layout.lines.len() * 5);

    for line in &layout.lines {
        let x = to_points(line.origin_x());
        let y = to_points(layout.height - line.y);
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![line.face.resource_name().into(), line.size.into()],
        ));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
}

fn to_points(mm: f32) -> f32 {
    mm / MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::layout::{Align, TextLine, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

    fn single_line_layout(text: &str) -> PageLayout {
        PageLayout {
            width: PAGE_WIDTH_MM,
            height: PAGE_HEIGHT_MM,
            lines: vec![TextLine {
                text: text.to_string(),
                face: FontFace::Helvetica,
                size: 12.0,
                x: 20.0,
                y: 80.0,
                align: Align::Left,
            }],
        }
    }

    #[test]
    fn test_to_points() {
        assert!((to_points(25.4) - 72.0).abs() < 1e-3);
        assert!((to_points(PAGE_WIDTH_MM) - 595.28).abs() < 0.01);
    }

    #[test]
    fn test_page_content_flips_y_axis() {
        let content = page_content(&single_line_layout("Full Name: Ana"));
        let td = content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .unwrap();
        let y = td.operands[1].as_float().unwrap();
        assert!((y - to_points(PAGE_HEIGHT_MM - 80.0)).abs() < 1e-2);
    }

    #[test]
    fn test_render_produces_single_page_pdf() {
        let layout = single_line_layout("Full Name: Ana");
        let pdf = LopdfRenderEngine::render(&layout, "Pass Slip").unwrap();
        assert!(pdf.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(String::from_utf8_lossy(&pdf).contains("Full Name: Ana"));
    }
}
