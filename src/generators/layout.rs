//! Fixed single-page layout of a pass slip.
//!
//! Positions are millimetres on an A4 portrait page, measured from the
//! top-left corner. `y` is the text baseline. Body lines advance a cursor,
//! the footer does not: it sits at [`FOOTER_Y`] whatever comes before it
//! and can overlap a long body.

use super::common::encode_win_ansi;
use super::metrics::{text_width_mm, MM_PER_PT};
use crate::form::{ApplicationRequest, Field};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const ORGANIZATION_SHORT_NAME: &str = "GNHS-OPSAS";
pub const ORGANIZATION_NAME: &str = "Guinsiliban National High School";
pub const SYSTEM_NAME: &str = "Online Pass Slip Application System";
pub const SECTION_TITLE: &str = "PASS SLIP APPLICATION";

const CENTER_X: f32 = 105.0;
const MARGIN_X: f32 = 20.0;
const BODY_TOP_Y: f32 = 80.0;
const LINE_STEP: f32 = 15.0;
const APPROVAL_GAP: f32 = 20.0;
pub const FOOTER_Y: f32 = 280.0;
const LINE_HEIGHT_FACTOR: f32 = 1.15;

const BODY_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 10.0;

/// The two standard faces the document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    pub const ALL: [FontFace; 2] = [FontFace::Helvetica, FontFace::HelveticaBold];

    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name of the font in the page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One run of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub face: FontFace,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub align: Align,
}

impl TextLine {
    /// Left edge of the text once alignment is applied.
    pub fn origin_x(&self) -> f32 {
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - self.width_mm() / 2.0,
        }
    }

    pub fn width_mm(&self) -> f32 {
        text_width_mm(&encode_win_ansi(&self.text), self.face, self.size)
    }
}

/// Every piece of text on the page, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub lines: Vec<TextLine>,
}

impl PageLayout {
    fn new() -> Self {
        Self {
            width: PAGE_WIDTH_MM,
            height: PAGE_HEIGHT_MM,
            lines: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// First line whose text starts with `prefix`.
    pub fn find(&self, prefix: &str) -> Option<&TextLine> {
        self.lines.iter().find(|line| line.text.starts_with(prefix))
    }

    fn push(&mut self, text: &str, face: FontFace, size: f32, x: f32, y: f32, align: Align) {
        // Embedded newlines continue below at the font's line height.
        let leading = size * LINE_HEIGHT_FACTOR * MM_PER_PT;
        for (row, part) in text.lines().enumerate() {
            self.lines.push(TextLine {
                text: part.to_string(),
                face,
                size,
                x,
                y: y + leading * row as f32,
                align,
            });
        }
    }
}

/// Lay out the pass slip for `request`, with `generated_on` in the footer.
pub fn layout_pass_slip(request: &ApplicationRequest, generated_on: &str) -> PageLayout {
    let mut page = PageLayout::new();

    page.push(
        ORGANIZATION_SHORT_NAME,
        FontFace::HelveticaBold,
        20.0,
        CENTER_X,
        20.0,
        Align::Center,
    );
    page.push(ORGANIZATION_NAME, FontFace::Helvetica, 14.0, CENTER_X, 30.0, Align::Center);
    page.push(SYSTEM_NAME, FontFace::Helvetica, 14.0, CENTER_X, 40.0, Align::Center);
    page.push(SECTION_TITLE, FontFace::HelveticaBold, 16.0, CENTER_X, 60.0, Align::Center);

    let rank = request.rank.map(|rank| rank.to_string()).unwrap_or_default();
    let time_out = request.time_out.map(|time| time.to_string()).unwrap_or_default();
    let time_return = request
        .time_return
        .map(|time| time.to_string())
        .unwrap_or_default();

    let mut entries = vec![
        (Field::FullName, request.full_name.as_str()),
        (Field::Rank, rank.as_str()),
        (Field::TimeOut, time_out.as_str()),
        (Field::TimeReturn, time_return.as_str()),
        (Field::PlacesToVisit, request.places_to_visit.as_str()),
    ];
    if !request.reason_for_visit.is_empty() {
        entries.push((Field::ReasonForVisit, request.reason_for_visit.as_str()));
    }

    let mut cursor = BODY_TOP_Y;
    for (field, value) in entries {
        let text = format!("{}: {}", field.label(), value);
        page.push(&text, FontFace::Helvetica, BODY_SIZE, MARGIN_X, cursor, Align::Left);
        cursor += LINE_STEP;
    }

    cursor += APPROVAL_GAP;
    page.push(
        "Approved: ____________________",
        FontFace::Helvetica,
        BODY_SIZE,
        MARGIN_X,
        cursor,
        Align::Left,
    );
    cursor += APPROVAL_GAP;
    page.push(
        "School Principal",
        FontFace::Helvetica,
        BODY_SIZE,
        MARGIN_X,
        cursor,
        Align::Left,
    );

    let footer = format!("Generated on: {generated_on}");
    page.push(
        &footer,
        FontFace::Helvetica,
        FOOTER_SIZE,
        MARGIN_X,
        FOOTER_Y,
        Align::Left,
    );

    page
}
