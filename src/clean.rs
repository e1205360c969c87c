use regex::Regex;
use std::sync::LazyLock;

use crate::charmap;

// Only the space character: tabs and other whitespace are left alone, and
// newlines are already gone by the time text reaches here.
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Collapse every run of spaces into one.
pub fn collapse_spaces(text: &str) -> String {
    RE_SPACES.replace_all(text, " ").into_owned()
}

/// Turn reconstructed page text into the corpus: repair the glyphs, then
/// collapse spaces. Case, accents and punctuation are untouched.
pub fn clean(text: &str) -> String {
    collapse_spaces(&charmap::repair(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse_spaces("a  b   c"), "a b c");
        assert_eq!(collapse_spaces("   lead"), " lead");
        assert_eq!(collapse_spaces("trail    "), "trail ");
    }

    #[test]
    fn test_collapse_leaves_tabs() {
        assert_eq!(collapse_spaces("a\t\tb"), "a\t\tb");
        assert_eq!(collapse_spaces("a \t  b"), "a \t b");
    }

    #[test]
    fn test_no_double_spaces_and_no_new_chars() {
        let inputs = ["", " ", "     ", "x  y", "  ¿Qué   tal  ?  ", "a \u{a0} b"];
        for input in inputs {
            let out = collapse_spaces(input);
            assert!(!out.contains("  "), "{out:?}");
            assert!(out.chars().all(|c| input.contains(c)));
            assert_eq!(out.replace(' ', ""), input.replace(' ', ""));
        }
    }

    #[test]
    fn test_clean_repairs_then_collapses() {
        // the bullet repair adds a space, which then merges with the next one
        assert_eq!(clean("¥  Educaci\u{160}n"), "• Educación");
        assert_eq!(clean("Pol™tica   p\u{153}blica"), "Política pública");
    }
}
