// Advance widths for the builtin Helvetica faces, from the Adobe AFM
// metrics, in 1/1000 em for ASCII 0x20..=0x7E. The builtin base-14
// fonts carry no metrics in the file itself, so measuring for alignment
// and wrapping has to happen here.

const PT_TO_MM: f64 = 25.4 / 72.0;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn advance(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of a single line of text in millimeters at the given size.
pub fn text_width_mm(text: &str, size_pt: f64, bold: bool) -> f64 {
    let units: u64 = text.chars().map(|c| u64::from(advance(c, bold))).sum();
    units as f64 / 1000.0 * size_pt * PT_TO_MM
}

/// Greedy word wrap against a maximum line width. A single word wider
/// than the line is emitted on its own line rather than split.
pub fn wrap(text: &str, size_pt: f64, bold: bool, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width_mm(&candidate, size_pt, bold) <= max_width_mm || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_zero_for_empty_text() {
        assert_eq!(text_width_mm("", 10.0, false), 0.0);
    }

    #[test]
    fn test_narrow_glyphs_measure_narrower() {
        let narrow = text_width_mm("iiii", 10.0, false);
        let wide = text_width_mm("WWWW", 10.0, false);
        assert!(narrow < wide);
    }

    #[test]
    fn test_bold_face_is_at_least_as_wide() {
        let regular = text_width_mm("Demarcation Panel", 10.0, false);
        let bold = text_width_mm("Demarcation Panel", 10.0, true);
        assert!(bold >= regular);
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = text_width_mm("Rack R01", 10.0, false);
        let large = text_width_mm("Rack R01", 20.0, false);
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_respects_max_width() {
        let text = "Please use this letter as authorization to order a cross-connect";
        let lines = wrap(text, 10.0, false, 50.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, false) <= 50.0);
        }
    }

    #[test]
    fn test_wrap_preserves_every_word() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap(text, 10.0, false, 30.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        let lines = wrap("Hall A", 10.0, false, 170.0);
        assert_eq!(lines, vec!["Hall A".to_string()]);
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = wrap("a veryveryverylongunbreakableword b", 10.0, false, 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "veryveryverylongunbreakableword");
    }
}
