//! Advance-width metrics for the standard PDF fonts, from the Adobe AFM
//! files. Widths are in 1/1000 em for the ASCII printable range (0x20–0x7E).
//! Characters outside the table measure as the space width — certificates
//! are overwhelmingly Latin text and the standard fonts are WinAnsi-encoded
//! anyway, so this is the same approximation the output itself makes.

use super::StandardFont;

pub struct StandardFontMetrics {
    /// Widths for chars 0x20..=0x7E, in 1/1000 em.
    widths: &'static [u16; 95],
}

impl StandardFontMetrics {
    /// Advance width of one character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        let cp = ch as u32;
        let units = if (0x20..=0x7E).contains(&cp) {
            self.widths[(cp - 0x20) as usize]
        } else {
            self.widths[0] // space
        };
        units as f64 / 1000.0 * font_size
    }

    /// Width of a string in points, including letter spacing between glyphs.
    pub fn measure_string(&self, text: &str, font_size: f64, letter_spacing: f64) -> f64 {
        let mut width = 0.0;
        let mut count = 0usize;
        for ch in text.chars() {
            width += self.char_width(ch, font_size);
            count += 1;
        }
        if count > 1 {
            width += letter_spacing * (count - 1) as f64;
        }
        width
    }
}

pub fn for_font(font: StandardFont) -> &'static StandardFontMetrics {
    match font {
        StandardFont::Helvetica | StandardFont::HelveticaOblique => &HELVETICA,
        StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => &HELVETICA_BOLD,
        StandardFont::TimesRoman => &TIMES_ROMAN,
        StandardFont::TimesBold => &TIMES_BOLD,
        StandardFont::TimesItalic => &TIMES_ITALIC,
        StandardFont::TimesBoldItalic => &TIMES_BOLD_ITALIC,
        StandardFont::Courier | StandardFont::CourierBold => &COURIER,
    }
}

static HELVETICA: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556,
        556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722,
        722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722,
        667, 944, 667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556,
        556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500,
        500, 334, 260, 334, 584,
    ],
};

static HELVETICA_BOLD: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556,
        556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, 975, 722, 722, 722,
        722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722,
        667, 944, 667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556, 333, 611,
        611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556,
        500, 389, 280, 389, 584,
    ],
};

static TIMES_ROMAN: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, 500, 500,
        500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444, 921, 722, 667, 667,
        722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722, 556, 722, 667, 556, 611, 722,
        722, 944, 722, 722, 611, 333, 278, 333, 469, 500, 333, 444, 500, 444, 500, 444, 333, 500,
        500, 278, 278, 500, 278, 778, 500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500,
        444, 480, 200, 480, 541,
    ],
};

static TIMES_BOLD: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278, 500, 500,
        500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500, 930, 722, 667, 722,
        722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778, 611, 778, 722, 556, 667, 722,
        722, 1000, 722, 722, 667, 333, 278, 333, 581, 500, 333, 500, 556, 444, 556, 444, 333, 500,
        556, 278, 333, 556, 278, 833, 556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500,
        444, 394, 220, 394, 520,
    ],
};

static TIMES_ITALIC: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278, 500, 500,
        500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500, 920, 611, 611, 667,
        722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722, 611, 722, 611, 500, 556, 722,
        611, 833, 611, 556, 556, 389, 278, 389, 422, 500, 333, 500, 500, 444, 500, 444, 278, 500,
        500, 278, 278, 444, 278, 722, 500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444,
        389, 400, 275, 400, 541,
    ],
};

static TIMES_BOLD_ITALIC: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278, 500, 500,
        500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500, 832, 667, 667, 667,
        722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722, 611, 722, 667, 556, 611, 722,
        667, 889, 667, 611, 611, 333, 278, 333, 570, 500, 333, 500, 500, 444, 500, 444, 333, 500,
        556, 278, 278, 500, 278, 778, 556, 500, 500, 500, 389, 389, 278, 556, 444, 667, 500, 444,
        389, 348, 220, 348, 570,
    ],
};

// Courier is monospaced; both weights advance 600.
static COURIER: StandardFontMetrics = StandardFontMetrics {
    widths: &[600; 95],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_space_width() {
        let w = for_font(StandardFont::Helvetica).char_width(' ', 12.0);
        assert!((w - 3.336).abs() < 0.001);
    }

    #[test]
    fn bold_wider_than_regular() {
        let regular = for_font(StandardFont::Helvetica).char_width('A', 12.0);
        let bold = for_font(StandardFont::HelveticaBold).char_width('A', 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn courier_is_monospaced() {
        let m = for_font(StandardFont::Courier);
        assert_eq!(m.char_width('i', 10.0), m.char_width('W', 10.0));
    }

    #[test]
    fn letter_spacing_applies_between_glyphs_only() {
        let m = for_font(StandardFont::TimesRoman);
        let tight = m.measure_string("ab", 10.0, 0.0);
        let spaced = m.measure_string("ab", 10.0, 2.0);
        assert!((spaced - tight - 2.0).abs() < 1e-9);
        // Single glyph gains nothing.
        assert_eq!(
            m.measure_string("a", 10.0, 0.0),
            m.measure_string("a", 10.0, 5.0)
        );
    }

    #[test]
    fn non_ascii_measures_as_space() {
        let m = for_font(StandardFont::Helvetica);
        assert_eq!(m.char_width('é', 12.0), m.char_width(' ', 12.0));
    }
}
