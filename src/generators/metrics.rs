//! Glyph widths of the standard Helvetica faces.
//!
//! Values come from the Adobe AFM files, in 1/1000 em, for the printable
//! ASCII range. Bytes outside it use the width of a digit.

use super::layout::FontFace;

const FIRST_CHAR: u8 = b' ';
const FALLBACK_WIDTH: u16 = 556;

/// Millimetres per PDF point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn glyph_width(face: FontFace, byte: u8) -> u16 {
    let table = match face {
        FontFace::Helvetica => &HELVETICA,
        FontFace::HelveticaBold => &HELVETICA_BOLD,
    };
    byte
        .checked_sub(FIRST_CHAR)
        .and_then(|index| table.get(usize::from(index)))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Advance width of WinAnsi-encoded text, in points.
pub fn text_width_pt(encoded: &[u8], face: FontFace, size_pt: f32) -> f32 {
    let units: u32 = encoded
        .iter()
        .map(|&byte| u32::from(glyph_width(face, byte)))
        .sum();
    units as f32 * size_pt / 1000.0
}

/// Advance width of WinAnsi-encoded text, in millimetres.
pub fn text_width_mm(encoded: &[u8], face: FontFace, size_pt: f32) -> f32 {
    text_width_pt(encoded, face, size_pt) * MM_PER_PT
}
