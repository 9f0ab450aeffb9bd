use strum::IntoEnumIterator;
use textrun_ucd::Script;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Line {0}: expected `start..end ; Script_Name`")]
    MissingField(usize),

    #[error("Line {0}: bad codepoint: {1}")]
    BadCodepoint(usize, String),

    #[error("Overlapping ranges at U+{0:04X} and U+{1:04X}")]
    Overlap(u32, u32),
}

/// One data line of Scripts.txt, script stored as the registry variant
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRange {
    pub start: u32,
    pub end: u32,
    pub script: String,
}

/// Parse Scripts.txt. Lines look like
///
/// ```text
/// 0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
/// 00AA          ; Latin # Lo       FEMININE ORDINAL INDICATOR
/// ```
///
/// Scripts the registry does not carry yet are skipped with a warning so
/// a newer UCD drop still generates; the registry has to catch up first
/// for those ranges to appear.
pub fn parse(text: &str) -> Result<Vec<ScriptRange>, ParseError> {
    let mut ranges = vec![];

    for (i, line) in text.lines().enumerate() {
        let nr = i + 1;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(';');
        let cps = fields.next().map(str::trim).ok_or(ParseError::MissingField(nr))?;
        let name = match fields.next().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ParseError::MissingField(nr)),
        };

        let (start, end) = match cps.split_once("..") {
            Some((first, last)) => (codepoint(nr, first)?, codepoint(nr, last)?),
            None => {
                let cp = codepoint(nr, cps)?;
                (cp, cp)
            }
        };

        let script = match variant_name(name) {
            Some(script) => script,
            None => {
                log::warn!("Line {nr}: skipping unknown script {name}");
                continue;
            }
        };

        ranges.push(ScriptRange { start, end, script });
    }

    Ok(ranges)
}

/// Sort by start and merge contiguous ranges of the same script.
pub fn coalesce(mut ranges: Vec<ScriptRange>) -> Result<Vec<ScriptRange>, ParseError> {
    ranges.sort_by_key(|range| range.start);

    let mut merged: Vec<ScriptRange> = vec![];
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start <= last.end {
                return Err(ParseError::Overlap(last.start, range.start));
            }
            if last.script == range.script && last.end + 1 == range.start {
                last.end = range.end;
                continue;
            }
        }
        merged.push(range);
    }

    Ok(merged)
}

/// UCD version from the `# Scripts-12.1.0.txt` header line.
pub fn ucd_version(text: &str) -> Option<&str> {
    let header = text.lines().next()?.trim();
    header.strip_prefix("# Scripts-")?.strip_suffix(".txt")
}

fn codepoint(nr: usize, text: &str) -> Result<u32, ParseError> {
    u32::from_str_radix(text.trim(), 16).map_err(|_| ParseError::BadCodepoint(nr, text.into()))
}

// Property value name to registry variant name. The property names drop
// their underscores; the odd capitalization is aliased explicitly.
fn variant_name(property: &str) -> Option<String> {
    let name: String = match property {
        "SignWriting" => "Signwriting".into(),
        _ => property.split('_').collect(),
    };

    Script::iter()
        .any(|script| format!("{script:?}") == name)
        .then_some(name)
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = "\
# Scripts-12.1.0.txt
# Date: 2019-04-01

0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
005B..0060    ; Common # ...
0061..007A    ; Latin # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
00AA          ; Latin # Lo       FEMININE ORDINAL INDICATOR
10A0..10C5    ; Georgian
";

    #[test]
    fn parses_ranges_and_singles() {
        let ranges = parse(SAMPLE).unwrap();
        assert_eq!(ranges.len(), 5);
        assert_eq!(
            ranges[0],
            ScriptRange {
                start: 0x41,
                end: 0x5A,
                script: "Latin".into()
            }
        );
        assert_eq!(ranges[3].start, 0xAA);
        assert_eq!(ranges[3].end, 0xAA);
        assert_eq!(ranges[4].script, "Georgian");
    }

    #[test]
    fn version_header() {
        assert_eq!(ucd_version(SAMPLE), Some("12.1.0"));
        assert_eq!(ucd_version("no header"), None);
    }

    #[test]
    fn skips_unknown_scripts() {
        let ranges = parse("30000..3134A  ; Khitan_Small_Script # ...\n").unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn bad_codepoint_is_an_error() {
        assert!(matches!(
            parse("00ZZ ; Latin\n"),
            Err(ParseError::BadCodepoint(1, _))
        ));
    }

    #[test]
    fn missing_script_is_an_error() {
        assert!(matches!(parse("0041..005A\n"), Err(ParseError::MissingField(1))));
    }

    #[test]
    fn underscored_names() {
        assert_eq!(variant_name("Old_Italic").as_deref(), Some("OldItalic"));
        assert_eq!(variant_name("Meetei_Mayek").as_deref(), Some("MeeteiMayek"));
        assert_eq!(variant_name("SignWriting").as_deref(), Some("Signwriting"));
        assert_eq!(variant_name("Latin").as_deref(), Some("Latin"));
        assert_eq!(variant_name("Khitan_Small_Script"), None);
    }

    #[test]
    fn coalesce_merges_contiguous_same_script() {
        let ranges = parse(SAMPLE).unwrap();
        let merged = coalesce(ranges).unwrap();
        // 005B..0060 Common keeps 0041..005A and 0061..007A apart, but
        // 007B(none) keeps 0061..007A and 00AA apart too
        assert_eq!(merged.len(), 5);

        let merged = coalesce(parse("0041..005A ; Latin\n005B..0060 ; Latin\n").unwrap()).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].start, 0x41);
        assert_eq!(merged[0].end, 0x60);
    }

    #[test]
    fn coalesce_rejects_overlap() {
        let overlapping = parse("0041..005A ; Latin\n0050..0060 ; Common\n").unwrap();
        assert!(matches!(
            coalesce(overlapping),
            Err(ParseError::Overlap(0x41, 0x50))
        ));
    }
}
