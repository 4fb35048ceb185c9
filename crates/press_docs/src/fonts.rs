//! Base-14 Helvetica metrics and single-byte text encoding.

use thiserror::Error;

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Character that cannot be represented in the single-byte page encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("character {ch:?} (U+{code:04X}) at byte offset {offset} is outside the Latin-1 range")]
pub struct EncodeError {
    pub ch: char,
    pub code: u32,
    pub offset: usize,
}

/// The three Helvetica faces used on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Bold, Font::Regular, Font::Italic];

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Bold => "F1",
            Font::Regular => "F2",
            Font::Italic => "F3",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            Font::Bold => "Helvetica-Bold",
            Font::Regular => "Helvetica",
            Font::Italic => "Helvetica-Oblique",
        }
    }

    /// Advance width of `ch` in thousandths of the font size.
    pub fn glyph_width(self, ch: char) -> u16 {
        let table = match self {
            Font::Bold => &HELVETICA_BOLD_WIDTHS,
            Font::Regular | Font::Italic => &HELVETICA_WIDTHS,
        };
        match ch {
            ' '..='~' => table[ch as usize - 0x20],
            // Latin-1 supplement: average lowercase advance
            _ => 556,
        }
    }

    /// Width of `text` in millimetres at `size_pt`.
    pub fn text_width(self, text: &str, size_pt: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.glyph_width(c))).sum();
        f64::from(units) / 1000.0 * size_pt / PT_PER_MM
    }
}

/// Encode `text` as Latin-1 bytes for a `WinAnsiEncoding` font.
///
/// Only printable ASCII and U+00A0..=U+00FF are accepted; both ranges map to
/// the same byte under WinAnsi.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        let code = ch as u32;
        match code {
            0x20..=0x7E | 0xA0..=0xFF => bytes.push(code as u8),
            _ => return Err(EncodeError { ch, code, offset }),
        }
    }
    Ok(bytes)
}

/// Encode `text` as a PDF literal string, including the parentheses.
///
/// Bytes above 0x7E are written as octal escapes so the content stream
/// stays ASCII.
pub fn pdf_string(text: &str) -> Result<String, EncodeError> {
    let bytes = encode_latin1(text)?;
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('(');
    for b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\{b:03o}")),
        }
    }
    out.push(')');
    Ok(out)
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
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
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_widths_match_afm() {
        assert_eq!(Font::Regular.glyph_width(' '), 278);
        assert_eq!(Font::Regular.glyph_width('@'), 1015);
        assert_eq!(Font::Regular.glyph_width('W'), 944);
        assert_eq!(Font::Regular.glyph_width('i'), 222);
        assert_eq!(Font::Regular.glyph_width('~'), 584);
        assert_eq!(Font::Bold.glyph_width('i'), 278);
        assert_eq!(Font::Bold.glyph_width('m'), 889);
        assert_eq!(Font::Italic.glyph_width('m'), 833);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let at_10 = Font::Regular.text_width("Service", 10.0);
        let at_20 = Font::Regular.text_width("Service", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-9);
        // "mm" is 1666 units: 16.66pt at 10pt, about 5.877mm
        assert!((Font::Regular.text_width("mm", 10.0) - 16.66 / PT_PER_MM).abs() < 1e-9);
    }

    #[test]
    fn test_encode_accepts_latin1() {
        assert_eq!(encode_latin1("caf\u{e9}").unwrap(), b"caf\xe9");
        assert_eq!(encode_latin1("a\u{a0}b").unwrap(), b"a\xa0b");
    }

    #[test]
    fn test_encode_rejects_curly_quote() {
        let err = encode_latin1("ok \u{201D}").unwrap_err();
        assert_eq!(err.ch, '\u{201D}');
        assert_eq!(err.code, 0x201D);
        assert_eq!(err.offset, 3);
        assert!(err.to_string().contains("U+201D"));
    }

    #[test]
    fn test_encode_rejects_control_chars() {
        assert!(encode_latin1("a\tb").is_err());
        assert!(encode_latin1("a\nb").is_err());
    }

    #[test]
    fn test_pdf_string_escapes() {
        assert_eq!(pdf_string("hello").unwrap(), "(hello)");
        assert_eq!(pdf_string("(test)").unwrap(), "(\\(test\\))");
        assert_eq!(pdf_string("a\\b").unwrap(), "(a\\\\b)");
        assert_eq!(pdf_string("caf\u{e9}").unwrap(), "(caf\\351)");
    }

    #[test]
    fn test_resource_names_are_distinct() {
        let names: Vec<&str> = Font::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names, vec!["F1", "F2", "F3"]);
    }
}
