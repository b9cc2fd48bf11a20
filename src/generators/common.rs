//! Common utilities for document generation.
//!
//! Shared helpers for footer dates, filenames and PDF text encoding.

use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

const FILENAME_PREFIX: &str = "pass-slip-";
const FILENAME_EXTENSION: &str = "pdf";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid whitespace pattern");
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as a US short date (e.g., "10/18/2026").
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Suggested filename for a pass slip, e.g. `pass-slip-juan-dela-cruz.pdf`.
///
/// Each whitespace run becomes one hyphen. The name is not trimmed, so
/// leading or trailing whitespace turns into a leading or trailing hyphen.
pub fn slip_filename(full_name: &str) -> String {
    let slug = WHITESPACE_RUN.replace_all(full_name, "-").to_lowercase();
    format!("{FILENAME_PREFIX}{slug}.{FILENAME_EXTENSION}")
}

/// Encode text as WinAnsi (Windows-1252) bytes for the standard Type1 fonts.
///
/// Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\t' => b' ',
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}
