//! IPA pronunciation normalization.
//!
//! Dictionary files and hand-typed input disagree on which glyph marks
//! primary stress and whether the IPA string is wrapped in slashes.
//! [`normalize_pronunciation`] folds every variant into one canonical
//! form so that entries compare and render consistently.

use unicode_normalization::UnicodeNormalization;

/// The canonical IPA primary stress mark (U+02C8, MODIFIER LETTER
/// VERTICAL LINE).
pub const STRESS_MARK: char = '\u{02C8}';

/// Normalize a raw IPA string into its canonical form.
///
/// - Applies Unicode canonical composition (NFC)
/// - Trims enclosing `/` delimiters
/// - Collapses the stress-mark variants — apostrophe (U+0027) and prime
///   (U+2032) — into [`STRESS_MARK`]
/// - Folds the velarized dark l (`ɫ`) into plain `l`
///
/// Total and idempotent; safe to call on already-normalized input.
///
/// ```rust
/// use vocab_rs::parser::normalize_pronunciation;
///
/// assert_eq!(normalize_pronunciation("/dɪ'zaɪn/"), "dɪˈzaɪn");
/// ```
pub fn normalize_pronunciation(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    composed
        .trim_matches('/')
        .chars()
        .map(|ch| match ch {
            '\u{0027}' | '\u{2032}' => STRESS_MARK,
            'ɫ' => 'l',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_pronunciation, STRESS_MARK};

    #[test]
    fn strips_enclosing_slashes() {
        assert_eq!(normalize_pronunciation("/ˈreɪnfɒrɪst/"), "ˈreɪnfɒrɪst");
        assert_eq!(normalize_pronunciation("ˈreɪnfɒrɪst"), "ˈreɪnfɒrɪst");
    }

    #[test]
    fn stress_mark_variants_collapse_identically() {
        let apostrophe = normalize_pronunciation("dI'zaIn");
        let canonical = normalize_pronunciation("dIˈzaIn");
        let prime = normalize_pronunciation("dI\u{2032}zaIn");

        assert_eq!(apostrophe, canonical);
        assert_eq!(canonical, prime);
        assert!(canonical.contains(STRESS_MARK));
        assert!(!canonical.contains('\''));
    }

    #[test]
    fn folds_dark_l() {
        assert_eq!(normalize_pronunciation("/fʊɫ/"), "fʊl");
    }

    #[test]
    fn applies_nfc_composition() {
        // "e" + COMBINING ACUTE ACCENT composes to a single code point.
        assert_eq!(normalize_pronunciation("e\u{0301}"), "\u{00E9}");
    }

    #[test]
    fn idempotent_on_arbitrary_input() {
        for raw in ["//ˈa//", "/dI'zaIn/", "", "///", "fʊɫ", "plain"] {
            let once = normalize_pronunciation(raw);
            let twice = normalize_pronunciation(&once);
            assert_eq!(once, twice, "normalize must be idempotent for {raw:?}");
        }
    }
}
