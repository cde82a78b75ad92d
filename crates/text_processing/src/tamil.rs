//! Tamil script utilities.
//!
//! The Tamil Unicode block is U+0B80..U+0BFF. Detection and tokenization
//! here are deliberately heuristic: no morphological analysis, just script
//! ranges and simple token classes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token classes: a Tamil run, a Latin run, or a digit run. Punctuation is
/// dropped.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0B80}-\u{0BFF}]+|[A-Za-z]+|\d+").expect("valid token regex"));

/// Check if a character falls in the Tamil Unicode block
pub fn is_tamil_char(c: char) -> bool {
    let code = c as u32;
    (0x0B80..=0x0BFF).contains(&code)
}

/// Fraction of Tamil-block characters among non-whitespace characters.
/// Returns 0.0 for empty or whitespace-only text.
pub fn tamil_ratio(text: &str) -> f32 {
    let mut tamil_chars = 0usize;
    let mut total_chars = 0usize;

    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        total_chars += 1;
        if is_tamil_char(c) {
            tamil_chars += 1;
        }
    }

    if total_chars == 0 {
        return 0.0;
    }

    tamil_chars as f32 / total_chars as f32
}

/// Split text into Tamil, Latin, and digit tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tamil_char() {
        assert!(is_tamil_char('வ'));
        assert!(is_tamil_char('ற'));
        assert!(!is_tamil_char('a'));
        assert!(!is_tamil_char('1'));
        // Devanagari is a different block
        assert!(!is_tamil_char('क'));
    }

    #[test]
    fn test_tamil_ratio() {
        assert_eq!(tamil_ratio(""), 0.0);
        assert_eq!(tamil_ratio("hello"), 0.0);
        assert!((tamil_ratio("வணக்கம்") - 1.0).abs() < f32::EPSILON);
        // Whitespace is excluded from the denominator
        assert!((tamil_ratio("  வணக்கம்  ") - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tokenize_mixed_script() {
        let tokens = tokenize("ரேஷன் card 2024 விண்ணப்பம்?");
        assert_eq!(tokens, vec!["ரேஷன்", "card", "2024", "விண்ணப்பம்"]);
    }

    #[test]
    fn test_tokenize_drops_punctuation() {
        let tokens = tokenize("how-to: apply!");
        assert_eq!(tokens, vec!["how", "to", "apply"]);
    }
}
