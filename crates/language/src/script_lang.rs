use textrun_ucd::Script;

use crate::LanguageCode;

// Primary writing system per language, primary script first where a
// language is written in several. Sorted by the language identifier
// bytes; the lookup binary searches with the same comparison.
#[rustfmt::skip]
const SCRIPTS_FOR_LANG: &[(&str, &[Script])] = &[
    ("aa", &[Script::Latin]),
    ("ab", &[Script::Cyrillic]),
    ("af", &[Script::Latin]),
    ("ak", &[Script::Latin]),
    ("am", &[Script::Ethiopic]),
    ("an", &[Script::Latin]),
    ("ar", &[Script::Arabic]),
    ("as", &[Script::Bengali]),
    ("av", &[Script::Cyrillic]),
    ("ay", &[Script::Latin]),
    ("az", &[Script::Latin]),
    ("ba", &[Script::Cyrillic]),
    ("be", &[Script::Cyrillic]),
    ("bg", &[Script::Cyrillic]),
    ("bh", &[Script::Devanagari]),
    ("bi", &[Script::Latin]),
    ("bm", &[Script::Latin]),
    ("bn", &[Script::Bengali]),
    ("bo", &[Script::Tibetan]),
    ("br", &[Script::Latin]),
    ("bs", &[Script::Latin]),
    ("ca", &[Script::Latin]),
    ("ce", &[Script::Cyrillic]),
    ("ch", &[Script::Latin]),
    ("co", &[Script::Latin]),
    ("cr", &[Script::CanadianAboriginal]),
    ("cs", &[Script::Latin]),
    ("cu", &[Script::Cyrillic]),
    ("cv", &[Script::Cyrillic]),
    ("cy", &[Script::Latin]),
    ("da", &[Script::Latin]),
    ("de", &[Script::Latin]),
    ("dv", &[Script::Thaana]),
    ("dz", &[Script::Tibetan]),
    ("ee", &[Script::Latin]),
    ("el", &[Script::Greek]),
    ("en", &[Script::Latin]),
    ("eo", &[Script::Latin]),
    ("es", &[Script::Latin]),
    ("et", &[Script::Latin]),
    ("eu", &[Script::Latin]),
    ("fa", &[Script::Arabic]),
    ("ff", &[Script::Latin]),
    ("fi", &[Script::Latin]),
    ("fj", &[Script::Latin]),
    ("fo", &[Script::Latin]),
    ("fr", &[Script::Latin]),
    ("fy", &[Script::Latin]),
    ("ga", &[Script::Latin]),
    ("gd", &[Script::Latin]),
    ("gl", &[Script::Latin]),
    ("gn", &[Script::Latin]),
    ("gu", &[Script::Gujarati]),
    ("gv", &[Script::Latin]),
    ("ha", &[Script::Latin]),
    ("he", &[Script::Hebrew]),
    ("hi", &[Script::Devanagari]),
    ("ho", &[Script::Latin]),
    ("hr", &[Script::Latin]),
    ("ht", &[Script::Latin]),
    ("hu", &[Script::Latin]),
    ("hy", &[Script::Armenian]),
    ("hz", &[Script::Latin]),
    ("ia", &[Script::Latin]),
    ("id", &[Script::Latin]),
    ("ie", &[Script::Latin]),
    ("ig", &[Script::Latin]),
    ("ii", &[Script::Yi]),
    ("ik", &[Script::Latin]),
    ("io", &[Script::Latin]),
    ("is", &[Script::Latin]),
    ("it", &[Script::Latin]),
    ("iu", &[Script::CanadianAboriginal]),
    ("ja", &[Script::Han, Script::Katakana, Script::Hiragana]),
    ("jv", &[Script::Latin]),
    ("ka", &[Script::Georgian]),
    ("ki", &[Script::Latin]),
    ("kj", &[Script::Latin]),
    ("kk", &[Script::Cyrillic]),
    ("kl", &[Script::Latin]),
    ("km", &[Script::Khmer]),
    ("kn", &[Script::Kannada]),
    ("ko", &[Script::Hangul, Script::Han]),
    ("kr", &[Script::Latin]),
    ("ks", &[Script::Arabic, Script::Devanagari]),
    ("ku", &[Script::Arabic, Script::Latin]),
    ("kv", &[Script::Cyrillic]),
    ("kw", &[Script::Latin]),
    ("ky", &[Script::Cyrillic]),
    ("la", &[Script::Latin]),
    ("lb", &[Script::Latin]),
    ("lg", &[Script::Latin]),
    ("li", &[Script::Latin]),
    ("ln", &[Script::Latin]),
    ("lo", &[Script::Lao]),
    ("lt", &[Script::Latin]),
    ("lv", &[Script::Latin]),
    ("mg", &[Script::Latin]),
    ("mh", &[Script::Latin]),
    ("mi", &[Script::Latin]),
    ("mk", &[Script::Cyrillic]),
    ("ml", &[Script::Malayalam]),
    ("mn", &[Script::Cyrillic, Script::Mongolian]),
    ("mr", &[Script::Devanagari]),
    ("ms", &[Script::Latin]),
    ("mt", &[Script::Latin]),
    ("my", &[Script::Myanmar]),
    ("na", &[Script::Latin]),
    ("nb", &[Script::Latin]),
    ("nd", &[Script::Latin]),
    ("ne", &[Script::Devanagari]),
    ("ng", &[Script::Latin]),
    ("nl", &[Script::Latin]),
    ("nn", &[Script::Latin]),
    ("no", &[Script::Latin]),
    ("nr", &[Script::Latin]),
    ("nv", &[Script::Latin]),
    ("ny", &[Script::Latin]),
    ("oc", &[Script::Latin]),
    ("om", &[Script::Latin]),
    ("or", &[Script::Oriya]),
    ("os", &[Script::Cyrillic, Script::Latin]),
    ("pa", &[Script::Gurmukhi]),
    ("pl", &[Script::Latin]),
    ("ps", &[Script::Arabic]),
    ("pt", &[Script::Latin]),
    ("qu", &[Script::Latin]),
    ("rm", &[Script::Latin]),
    ("rn", &[Script::Latin]),
    ("ro", &[Script::Latin]),
    ("ru", &[Script::Cyrillic]),
    ("rw", &[Script::Latin]),
    ("sa", &[Script::Devanagari]),
    ("sc", &[Script::Latin]),
    ("sd", &[Script::Arabic, Script::Devanagari]),
    ("se", &[Script::Latin]),
    ("sg", &[Script::Latin]),
    ("si", &[Script::Sinhala]),
    ("sk", &[Script::Latin]),
    ("sl", &[Script::Latin]),
    ("sm", &[Script::Latin]),
    ("sn", &[Script::Latin]),
    ("so", &[Script::Latin]),
    ("sq", &[Script::Latin]),
    ("sr", &[Script::Cyrillic, Script::Latin]),
    ("ss", &[Script::Latin]),
    ("st", &[Script::Latin]),
    ("su", &[Script::Latin]),
    ("sv", &[Script::Latin]),
    ("sw", &[Script::Latin]),
    ("ta", &[Script::Tamil]),
    ("te", &[Script::Telugu]),
    ("tg", &[Script::Cyrillic]),
    ("th", &[Script::Thai]),
    ("ti", &[Script::Ethiopic]),
    ("tk", &[Script::Latin, Script::Cyrillic]),
    ("tl", &[Script::Latin, Script::Tagalog]),
    ("tn", &[Script::Latin]),
    ("to", &[Script::Latin]),
    ("tr", &[Script::Latin]),
    ("ts", &[Script::Latin]),
    ("tt", &[Script::Cyrillic]),
    ("tw", &[Script::Latin]),
    ("ty", &[Script::Latin]),
    ("ug", &[Script::Arabic]),
    ("uk", &[Script::Cyrillic]),
    ("ur", &[Script::Arabic]),
    ("uz", &[Script::Latin, Script::Cyrillic]),
    ("ve", &[Script::Latin]),
    ("vi", &[Script::Latin]),
    ("vo", &[Script::Latin]),
    ("wa", &[Script::Latin]),
    ("wo", &[Script::Latin]),
    ("xh", &[Script::Latin]),
    ("yi", &[Script::Hebrew]),
    ("yo", &[Script::Latin]),
    ("za", &[Script::Latin, Script::Han]),
    ("zh", &[Script::Han, Script::Bopomofo]),
    ("zu", &[Script::Latin]),
];

/// Primary script a language is written in, with the language code the
/// matched table entry canonicalizes to.
///
/// Unrecognized languages yield `(Script::Invalid, LanguageCode::Unknown)`.
/// Comparison is byte-wise and exact; pass a bare primary subtag.
pub fn script_for_language(lang: &str) -> (Script, LanguageCode) {
    match SCRIPTS_FOR_LANG.binary_search_by(|(name, _)| name.as_bytes().cmp(lang.as_bytes())) {
        Ok(pos) => {
            let (name, scripts) = SCRIPTS_FOR_LANG[pos];
            (scripts[0], LanguageCode::from_iso639(name))
        }
        Err(_) => (Script::Invalid, LanguageCode::Unknown),
    }
}

/// All scripts a language is written in, primary first. Empty for
/// unrecognized languages.
pub fn scripts_for_language(lang: &str) -> &'static [Script] {
    SCRIPTS_FOR_LANG
        .binary_search_by(|(name, _)| name.as_bytes().cmp(lang.as_bytes()))
        .map(|pos| SCRIPTS_FOR_LANG[pos].1)
        .unwrap_or(&[])
}

/// Resolve the script to shape a run with from a per-character script
/// hint and the content language.
///
/// https://www.w3.org/TR/css-text-3/#script-tagging
///
/// Bopomofo annotations shape as Han, even when the hint came from
/// per-character classification. A missing hint (`Invalid`) falls back to
/// the language default where one is defined; languages without a default
/// get the hint back as is and the caller decides.
pub fn normalize_script(lang: LanguageCode, hint: Script) -> Script {
    if hint == Script::Bopomofo {
        return Script::Han;
    }

    if hint != Script::Invalid {
        return hint;
    }

    match lang {
        LanguageCode::Zh => Script::Han,
        LanguageCode::Ja => Script::Han,
        LanguageCode::Ko => Script::Hangul,
        LanguageCode::Unknown => Script::Common,
        _ => hint,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for pair in SCRIPTS_FOR_LANG.windows(2) {
            assert!(
                pair[0].0.as_bytes() < pair[1].0.as_bytes(),
                "{} must sort before {}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn every_entry_resolves() {
        for (name, scripts) in SCRIPTS_FOR_LANG {
            assert!(!scripts.is_empty(), "{name} has no scripts");
            assert_ne!(
                LanguageCode::from_iso639(name),
                LanguageCode::Unknown,
                "{name} is not in the registry"
            );
        }
    }

    #[test]
    fn lookup_hits() {
        assert_eq!(script_for_language("zh"), (Script::Han, LanguageCode::Zh));
        assert_eq!(script_for_language("ko"), (Script::Hangul, LanguageCode::Ko));
        assert_eq!(script_for_language("en"), (Script::Latin, LanguageCode::En));
        assert_eq!(script_for_language("el"), (Script::Greek, LanguageCode::El));
    }

    #[test]
    fn lookup_misses() {
        assert_eq!(
            script_for_language("xx"),
            (Script::Invalid, LanguageCode::Unknown)
        );
        // Exact byte comparison, no case folding on this path
        assert_eq!(
            script_for_language("ZH"),
            (Script::Invalid, LanguageCode::Unknown)
        );
        assert_eq!(script_for_language(""), (Script::Invalid, LanguageCode::Unknown));
    }

    #[test]
    fn secondary_scripts() {
        assert_eq!(
            scripts_for_language("ja"),
            &[Script::Han, Script::Katakana, Script::Hiragana]
        );
        assert_eq!(scripts_for_language("zh"), &[Script::Han, Script::Bopomofo]);
        assert!(scripts_for_language("xx").is_empty());
    }

    #[test]
    fn normalize_language_defaults() {
        assert_eq!(
            normalize_script(LanguageCode::Zh, Script::Invalid),
            Script::Han
        );
        assert_eq!(
            normalize_script(LanguageCode::Ja, Script::Invalid),
            Script::Han
        );
        assert_eq!(
            normalize_script(LanguageCode::Ko, Script::Invalid),
            Script::Hangul
        );
        assert_eq!(
            normalize_script(LanguageCode::Unknown, Script::Invalid),
            Script::Common
        );
    }

    #[test]
    fn normalize_bopomofo_always_han() {
        assert_eq!(
            normalize_script(LanguageCode::Zh, Script::Bopomofo),
            Script::Han
        );
        // Overrides an explicit hint regardless of language
        assert_eq!(
            normalize_script(LanguageCode::Ko, Script::Bopomofo),
            Script::Han
        );
    }

    #[test]
    fn normalize_keeps_valid_hint() {
        assert_eq!(
            normalize_script(LanguageCode::Zh, Script::Latin),
            Script::Latin
        );
        assert_eq!(
            normalize_script(LanguageCode::Unknown, Script::Greek),
            Script::Greek
        );
    }

    #[test]
    fn normalize_no_default_passes_invalid_through() {
        // Languages without a shaping default hand the invalid hint back
        // unchanged; callers are expected to have their own fallback.
        assert_eq!(
            normalize_script(LanguageCode::Fr, Script::Invalid),
            Script::Invalid
        );
        assert_eq!(
            normalize_script(LanguageCode::Th, Script::Invalid),
            Script::Invalid
        );
    }
}
