// Whitespace normalization for free-text field values

/// The ECMAScript `\s` set: Unicode `White_Space` without NEL (U+0085),
/// plus the byte-order mark.
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trim both ends and collapse every internal whitespace run to one space.
///
/// `"  hi \t\n there  "` becomes `"hi there"`. Applying it twice yields the
/// same string as applying it once.
pub fn normalize_whitespace(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    for segment in value.split(is_whitespace).filter(|s| !s.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Returns `true` when [`normalize_whitespace`] would leave `value` unchanged.
pub fn is_normalized(value: &str) -> bool {
    let mut previous_was_space = true;
    for c in value.chars() {
        if is_whitespace(c) {
            if c != ' ' || previous_was_space {
                return false;
            }
            previous_was_space = true;
        } else {
            previous_was_space = false;
        }
    }
    // trailing space
    !previous_was_space || value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses() {
        assert_eq!(normalize_whitespace("  hi   there  "), "hi there");
        assert_eq!(normalize_whitespace("a\t\tb\n\nc"), "a b c");
        assert_eq!(normalize_whitespace("\r\n lead"), "lead");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   \t\n "), "");
    }

    #[test]
    fn test_unicode_whitespace() {
        // no-break space, ideographic space, byte-order mark
        assert_eq!(normalize_whitespace("\u{00A0}foo\u{3000}\u{3000}bar\u{FEFF}"), "foo bar");
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(normalize_whitespace("a\u{85}b"), "a\u{85}b");
        assert_eq!(normalize_whitespace("a\u{85}b\u{85}"), "a\u{85}b\u{85}");
        assert_eq!(normalize_whitespace(" \u{85} "), "\u{85}");
        assert!(is_normalized("a\u{85}b"));
    }

    #[test]
    fn test_whitespace_set_edges() {
        // in `\s` but not in Unicode White_Space
        assert!(is_whitespace('\u{FEFF}'));
        // in White_Space but not in `\s`
        assert!(!is_whitespace('\u{85}'));
        // in neither
        for c in ['\u{180E}', '\u{200B}', '\u{2060}'] {
            assert!(!is_whitespace(c), "{c:?}");
            assert_eq!(normalize_whitespace(&format!("x{c}y")), format!("x{c}y"));
        }
        // in both
        for c in [
            '\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{A0}', '\u{1680}', '\u{2000}',
            '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
        ] {
            assert!(is_whitespace(c), "{c:?}");
            assert_eq!(normalize_whitespace(&format!("{c}x{c}{c}y{c}")), "x y");
        }
    }

    #[test]
    fn test_non_whitespace_untouched() {
        assert_eq!(normalize_whitespace("Déjà-vu_42"), "Déjà-vu_42");
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized(""));
        assert!(is_normalized("foo bar"));
        assert!(!is_normalized(" foo"));
        assert!(!is_normalized("foo "));
        assert!(!is_normalized("foo  bar"));
        assert!(!is_normalized("foo\tbar"));
        assert!(!is_normalized(" "));
    }
}
