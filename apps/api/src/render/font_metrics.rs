//! Static font-metric tables for the PDF backend's built-in fonts.
//!
//! Character widths are in em units (relative to font size). This is an
//! intentional approximation of the real AFM metrics: close enough to
//! wrap body text and center headings; small residual error only moves a
//! line break by a word, never breaks the layout.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

/// Static character-width table for one font face.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space)
/// through 0x7E (~). Non-ASCII characters fall back to `average_char_width`.
pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap: splits `text` into lines no wider than
    /// `max_width_em`. A single word wider than the limit gets a line of
    /// its own rather than being split mid-word.
    pub fn wrap(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_width = self.measure_str(word);

            if !current.is_empty() && current_width + self.space_width + word_width > max_width_em
            {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if !current.is_empty() {
                current.push(' ');
                current_width += self.space_width;
            }
            current.push_str(word);
            current_width += word_width;
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Helvetica — regular body text.
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1     2     3     4     5     6     7     8     9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;     <     =     >     ?     @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \     ]     ^     _     `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {     |     }     ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.540,
    space_width: 0.278,
};

/// Helvetica Bold — headings, names, entry leads.
pub static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1     2     3     4     5     6     7     8     9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;     <     =     >     ?     @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \     ]     ^     _     `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {     |     }     ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.560,
    space_width: 0.278,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(HELVETICA.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = HELVETICA.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let width = HELVETICA.measure_str("é");
        assert!((width - HELVETICA.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_measures_wider_than_regular() {
        let text = "Backend Engineer at Acme";
        assert!(HELVETICA_BOLD.measure_str(text) > HELVETICA.measure_str(text));
    }

    #[test]
    fn test_wrap_empty_text_is_no_lines() {
        assert!(HELVETICA.wrap("", 40.0).is_empty());
        assert!(HELVETICA.wrap("   ", 40.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = HELVETICA.wrap("Rust engineer", 40.0);
        assert_eq!(lines, vec!["Rust engineer"]);
    }

    #[test]
    fn test_wrap_long_text_breaks_and_preserves_words() {
        let text = "word ".repeat(60);
        let lines = HELVETICA.wrap(&text, 10.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(HELVETICA.measure_str(line) <= 10.0 + 1e-3);
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined.split_whitespace().count(), 60);
    }

    #[test]
    fn test_wrap_oversized_word_gets_its_own_line() {
        let lines = HELVETICA.wrap("tiny Pneumonoultramicroscopicsilicovolcanoconiosis tiny", 5.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Pneumonoultramicroscopicsilicovolcanoconiosis");
    }
}
