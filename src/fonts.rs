//! Metrics and encoding for the two base-14 faces the report uses.
//!
//! Base-14 fonts are not embedded, so widths come from the Adobe core font
//! metrics instead of a parsed font file.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    pub const ALL: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];

    /// Resource name used in page content streams.
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    pub(crate) fn base_font(self) -> &'static [u8] {
        match self {
            FontFace::Regular => b"Helvetica",
            FontFace::Bold => b"Helvetica-Bold",
        }
    }

    /// Ascent as a fraction of the font size.
    pub fn ascent(self) -> f32 {
        0.718
    }

    /// Descent below the baseline as a fraction of the font size.
    pub fn descent(self) -> f32 {
        0.207
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::Regular => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Width of a single character in 1000-units.
    pub fn char_width_1000(self, ch: char) -> f32 {
        let byte = char_to_winansi(ch);
        match byte {
            32..=126 => self.widths()[(byte - 32) as usize] as f32,
            // Rendered as '?'
            0 => self.widths()[(b'?' - 32) as usize] as f32,
            _ => upper_half_width(self, byte),
        }
    }

    pub fn text_width(self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width_1000(ch))
            .sum::<f32>()
            * font_size
            / 1000.0
    }

    pub fn space_width(self, font_size: f32) -> f32 {
        self.char_width_1000(' ') * font_size / 1000.0
    }
}

/// Helvetica widths for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0..9
    278, 278, 584, 584, 584, 556, 1015,                                             // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N..Z
    278, 278, 278, 469, 556, 333,                                                   // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n..z
    334, 260, 334, 584,                                                             // {..~
];

/// Helvetica-Bold widths for ASCII 32..=126.
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

/// Widths for the WinAnsi upper half that the report copy can contain.
/// Anything else falls back to the average lowercase width.
fn upper_half_width(face: FontFace, byte: u8) -> f32 {
    match (byte, face) {
        (0x95, _) => 350.0,               // bullet
        (0x96, _) => 556.0,               // en dash
        (0x97, _) => 1000.0,              // em dash
        (0x85, _) => 1000.0,              // ellipsis
        (0x91 | 0x92, FontFace::Regular) => 222.0,
        (0x91 | 0x92, FontFace::Bold) => 278.0,
        (0x93 | 0x94, FontFace::Regular) => 333.0,
        (0x93 | 0x94, FontFace::Bold) => 500.0,
        (0xA9 | 0xAE, _) => 737.0,        // copyright, registered
        (0xA0, _) => 278.0,               // nbsp
        _ => 556.0,
    }
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007E => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Characters outside the code page are replaced with `?` so nothing silently vanishes.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter(|c| !c.is_control())
        .map(|c| match char_to_winansi(c) {
            0 => b'?',
            byte => byte,
        })
        .collect()
}
