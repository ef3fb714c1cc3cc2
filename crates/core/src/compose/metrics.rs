//! Helvetica font metrics.
//!
//! The standard-14 Helvetica faces are not embedded in the PDF, so text has to be measured
//! from the published AFM advance widths. Values are in thousandths of an em.

/// Face used for a block of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

/// Ascender of both Helvetica faces.
const ASCENDER: f32 = 718.0;

/// Distance between font bounding box top (931) and bottom (-225), used as the line pitch.
const LINE_PITCH: f32 = 1156.0;

/// Advance width used for characters outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica widths for `' '..='~'`.
#[rustfmt::skip]
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold widths for `' '..='~'`.
#[rustfmt::skip]
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl Face {
    fn advance(self, ch: char) -> u16 {
        let table = match self {
            Face::Regular => &REGULAR_WIDTHS,
            Face::Bold => &BOLD_WIDTHS,
        };
        match ch {
            ' '..='~' => table[ch as usize - ' ' as usize],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` in points when set at `size`.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| u32::from(self.advance(ch))).sum();
        units as f32 * size / 1000.0
    }

    /// Vertical distance between consecutive baselines at `size`.
    pub fn line_height(self, size: f32) -> f32 {
        LINE_PITCH * size / 1000.0
    }

    /// Distance from the top of a line box to its baseline at `size`.
    pub fn ascent(self, size: f32) -> f32 {
        ASCENDER * size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_digits_match_afm() {
        assert_eq!(Face::Regular.text_width(" ", 1000.0), 278.0);
        assert_eq!(Face::Regular.text_width("0123456789", 1000.0), 5560.0);
        assert_eq!(Face::Bold.text_width("0123456789", 1000.0), 5560.0);
        assert_eq!(Face::Regular.text_width("r", 1000.0), 333.0);
        assert_eq!(Face::Bold.text_width("r", 1000.0), 389.0);
    }

    #[test]
    fn width_scales_with_size() {
        let at_10 = Face::Regular.text_width("Gastritis", 10.0);
        let at_20 = Face::Regular.text_width("Gastritis", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn bold_is_wider_than_regular_for_lowercase() {
        assert!(Face::Bold.text_width("treatment", 16.0) > Face::Regular.text_width("treatment", 16.0));
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        assert_eq!(Face::Regular.text_width("é", 1000.0), 556.0);
    }

    #[test]
    fn line_height_includes_gap() {
        assert!((Face::Regular.line_height(16.0) - 18.496).abs() < 1e-3);
    }
}
