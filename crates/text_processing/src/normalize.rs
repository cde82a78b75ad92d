//! Script-aware text normalization.

use unicode_normalization::UnicodeNormalization;

/// Normalize text for comparison and matching.
///
/// Applies NFC so visually identical Tamil glyph sequences compare equal,
/// lowercases Latin script (Tamil has no case and passes through), and
/// collapses internal whitespace runs to single spaces with trimmed ends.
/// Empty input yields empty output; the function is idempotent.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let lowered = composed.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("  hello   world \t\n"), "hello world");
    }

    #[test]
    fn test_lowercases_latin_only() {
        assert_eq!(normalize("Birth CERTIFICATE"), "birth certificate");
        // Tamil passes through unchanged
        assert_eq!(normalize("பிறப்பு சான்றிதழ்"), "பிறப்பு சான்றிதழ்");
    }

    #[test]
    fn test_nfc_composition() {
        // "é" decomposed (e + combining acute) composes to a single codepoint
        let decomposed = "e\u{0301}";
        let normalized = normalize(decomposed);
        assert_eq!(normalized, "\u{00e9}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "  Mixed   CASE  text ",
            "வருமான சான்றிதழ் எப்படி?",
            "e\u{0301}l\u{0301}",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
