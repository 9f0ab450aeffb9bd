mod enums;
mod iso15924;
mod script_table;

pub use enums::Script;
pub use iso15924::UNKNOWN_TAG;

use script_table::SCRIPT_RANGES;

/// Codepoints below this are classified through a direct index table
/// instead of the range search.
pub const EASY_SCRIPTS_RANGE: u32 = 0x2000;

// Replays the range table into a dense array so the two can never
// disagree. Covers Basic Latin up through Greek Extended.
const fn build_easy_table() -> [Script; EASY_SCRIPTS_RANGE as usize] {
    let mut table = [Script::Unknown; EASY_SCRIPTS_RANGE as usize];
    let mut i = 0;
    while i < SCRIPT_RANGES.len() {
        let (start, len, script) = SCRIPT_RANGES[i];
        if start >= EASY_SCRIPTS_RANGE {
            break;
        }

        let mut ch = start as usize;
        let end = (start + len) as usize;
        while ch < end && ch < EASY_SCRIPTS_RANGE as usize {
            table[ch] = script;
            ch += 1;
        }
        i += 1;
    }
    table
}

static EASY_SCRIPTS: [Script; EASY_SCRIPTS_RANGE as usize] = build_easy_table();

/// Script of a character.
pub fn script(ch: char) -> Script {
    script_of(ch as u32)
}

/// Script of a raw codepoint. Total over any 32 bit value: unassigned
/// codepoints, surrogates, private use and values past the Unicode range
/// all classify as [`Script::Unknown`].
pub fn script_of(ch: u32) -> Script {
    if ch < EASY_SCRIPTS_RANGE {
        return EASY_SCRIPTS[ch as usize];
    }

    match search_ranges(ch, SCRIPT_RANGES.len() / 2) {
        Some(pos) => SCRIPT_RANGES[pos].2,
        None => Script::Unknown,
    }
}

/// Range search cursor for classifying many nearby codepoints.
///
/// The search remembers where the previous hit landed and starts the next
/// search there, which skips most of the bisection when consecutive
/// queries fall in the same or a neighboring range, as they do when
/// walking a string. Results are identical to [`script_of`] for every
/// input and any cursor state; the cursor is only a starting point for
/// the search.
#[derive(Debug, Clone)]
pub struct ScriptCursor {
    hint: usize,
}

impl ScriptCursor {
    pub fn new() -> ScriptCursor {
        ScriptCursor {
            hint: SCRIPT_RANGES.len() / 2,
        }
    }

    pub fn script(&mut self, ch: char) -> Script {
        self.script_of(ch as u32)
    }

    pub fn script_of(&mut self, ch: u32) -> Script {
        if ch < EASY_SCRIPTS_RANGE {
            return EASY_SCRIPTS[ch as usize];
        }

        match search_ranges(ch, self.hint) {
            Some(pos) => {
                self.hint = pos;
                SCRIPT_RANGES[pos].2
            }
            None => Script::Unknown,
        }
    }
}

impl Default for ScriptCursor {
    fn default() -> ScriptCursor {
        ScriptCursor::new()
    }
}

// Bounds-checked bisection that may start from any in-range midpoint.
fn search_ranges(ch: u32, hint: usize) -> Option<usize> {
    let mut lower = 0;
    let mut upper = SCRIPT_RANGES.len() - 1;
    let mut mid = hint.min(upper);

    loop {
        let (start, len, _) = SCRIPT_RANGES[mid];
        if ch < start {
            if mid == 0 {
                return None;
            }
            upper = mid - 1;
        } else if ch >= start + len {
            lower = mid + 1;
        } else {
            return Some(mid);
        }

        if lower > upper {
            return None;
        }
        mid = (lower + upper) / 2;
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    // Reference answer a plain table walk gives, no easy table, no
    // bisection.
    fn linear_scan(ch: u32) -> Script {
        SCRIPT_RANGES
            .iter()
            .find(|(start, len, _)| *start <= ch && ch < start + len)
            .map(|(_, _, script)| *script)
            .unwrap_or(Script::Unknown)
    }

    #[test]
    fn known_codepoints() {
        assert_eq!(script('A'), Script::Latin);
        assert_eq!(script('中'), Script::Han);
        assert_eq!(script('あ'), Script::Hiragana);
        assert_eq!(script('ア'), Script::Katakana);
        assert_eq!(script('가'), Script::Hangul);
        assert_eq!(script('ㄅ'), Script::Bopomofo);
        assert_eq!(script('א'), Script::Hebrew);
        assert_eq!(script(' '), Script::Common);
        assert_eq!(script('\u{0300}'), Script::Inherited);
    }

    #[test]
    fn total_over_u32() {
        assert_eq!(script_of(0x110000), Script::Unknown);
        assert_eq!(script_of(u32::MAX), Script::Unknown);
        // Surrogates and private use have no script
        assert_eq!(script_of(0xD800), Script::Unknown);
        assert_eq!(script_of(0xE000), Script::Unknown);
    }

    #[test]
    fn easy_table_matches_ranges() {
        for ch in 0..EASY_SCRIPTS_RANGE {
            assert_eq!(
                script_of(ch),
                linear_scan(ch),
                "easy table disagrees with range table at U+{ch:04X}"
            );
        }
    }

    #[test]
    fn ranges_sorted_and_disjoint() {
        let mut prev_end = 0u32;
        for (start, len, _) in SCRIPT_RANGES {
            assert!(
                *start >= prev_end,
                "range starting at U+{start:04X} overlaps the previous one"
            );
            assert!(*len > 0);
            prev_end = start + len;
        }
    }

    #[test]
    fn cursor_matches_fresh_search() {
        let interesting: Vec<u32> = (0..0x3100)
            .chain(0x4DF0..0x4E10)
            .chain(0x9FE0..0xA010)
            .chain(0xFFF0..0x10010)
            .chain(0x1F290..0x1F310)
            .chain(0x2FA10..0x2FA30)
            .collect();

        let mut cursor = ScriptCursor::new();
        for &ch in &interesting {
            assert_eq!(cursor.script_of(ch), script_of(ch), "ascending at U+{ch:04X}");
        }

        let mut cursor = ScriptCursor::new();
        for &ch in interesting.iter().rev() {
            assert_eq!(cursor.script_of(ch), script_of(ch), "descending at U+{ch:04X}");
        }

        // Deterministic shuffle, jumps all over the table
        let mut cursor = ScriptCursor::new();
        let mut state = 0x12345678u32;
        for _ in 0..interesting.len() {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            let ch = interesting[state as usize % interesting.len()];
            assert_eq!(cursor.script_of(ch), script_of(ch), "shuffled at U+{ch:04X}");
        }
    }

    #[test]
    fn iso15924_round_trip() {
        for script in Script::iter().filter(|s| *s != Script::Invalid) {
            let tag = script.iso15924();
            assert_ne!(tag, 0, "{script:?} has no tag");
            assert_eq!(Script::from_iso15924(tag), script);
        }
    }

    #[test]
    fn iso15924_sentinels() {
        assert_eq!(Script::Invalid.iso15924(), 0);
        assert_eq!(Script::from_iso15924(0), Script::Invalid);
        assert_eq!(UNKNOWN_TAG, 0x5A7A7A7A);
        // Past the registry tail everything collapses to the unknown tag
        assert_eq!(Script::from_ordinal(0xFFFF).iso15924(), UNKNOWN_TAG);
        // An unassigned but nonzero tag
        assert_eq!(
            Script::from_iso15924(u32::from_be_bytes(*b"Qaaa")),
            Script::Unknown
        );
    }

    #[test]
    fn registry_ordinals() {
        assert_eq!(Script::from_ordinal(0), Script::Common);
        assert_eq!(Script::from_ordinal(Script::Latin as u32), Script::Latin);
        assert_eq!(Script::from_ordinal(Script::Wancho as u32), Script::Wancho);
        // Invalid is not part of the registry
        assert_eq!(Script::from_ordinal(Script::Invalid as u32), Script::Unknown);
    }

    #[test]
    fn scenario_tags() {
        assert_eq!(Script::Han.iso15924(), u32::from_be_bytes(*b"Hani"));
        assert_eq!(
            Script::from_iso15924(u32::from_be_bytes(*b"Latn")),
            Script::Latin
        );
    }
}
