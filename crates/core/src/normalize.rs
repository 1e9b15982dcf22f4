//! Free-text normalization applied to name fields before key derivation.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose accented characters (NFD) and drop every combining mark,
/// leaving the base letters. Case and spacing are preserved; text without
/// diacritics passes through unchanged.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Trim and collapse runs of whitespace to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full name-field normalization: whitespace collapse, then diacritic strip.
pub fn normalize(text: &str) -> String {
    strip_diacritics(&collapse_whitespace(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spanish_diacritics() {
        assert_eq!(strip_diacritics("Pérez Muñoz Núñez"), "Perez Munoz Nunez");
        assert_eq!(strip_diacritics("MARÍA JOSÉ"), "MARIA JOSE");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(strip_diacritics("Gonzalez Rojas"), "Gonzalez Rojas");
    }

    #[test]
    fn decomposed_input_handled() {
        // "e" + U+0301 combining acute, already decomposed
        assert_eq!(strip_diacritics("Pe\u{0301}rez"), "Perez");
    }

    #[test]
    fn collapse_handles_runs_and_edges() {
        assert_eq!(collapse_whitespace("  Ana   Maria  Perez "), "Ana Maria Perez");
        // U+00A0 counts as whitespace and becomes a plain space
        assert_eq!(collapse_whitespace("\tAna\u{a0}Maria\n"), "Ana Maria");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = ["  José   Luis  Ávila ", "Pérez", "plain name", ""];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn normalize_preserves_case() {
        assert_eq!(normalize("  ÁNGELA  del  Río "), "ANGELA del Rio");
    }
}
