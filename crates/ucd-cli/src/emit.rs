use crate::scripts_txt::ScriptRange;

/// Render the script range table module consumed by textrun-ucd.
pub fn script_table(version: &str, ranges: &[ScriptRange]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "// Generated from Scripts.txt (UCD {version}) by `ucd gen`. Do not edit.\n"
    ));
    out.push_str("\nuse crate::Script;\n\n");
    out.push_str(
        "// (first codepoint, number of codepoints, script), sorted by first\n\
         // codepoint, non-overlapping. Codepoints in no range have no assigned\n\
         // script.\n",
    );
    out.push_str("#[rustfmt::skip]\n");
    out.push_str("pub(crate) const SCRIPT_RANGES: &[(u32, u32, Script)] = &[\n");

    for range in ranges {
        let len = range.end - range.start + 1;
        out.push_str(&format!(
            "    (0x{:04X}, 0x{:02X}, Script::{}),\n",
            range.start, len, range.script
        ));
    }

    out.push_str("];\n");
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_rows() {
        let ranges = vec![
            ScriptRange {
                start: 0x41,
                end: 0x5A,
                script: "Latin".into(),
            },
            ScriptRange {
                start: 0x10000,
                end: 0x100FA,
                script: "LinearB".into(),
            },
        ];

        let module = script_table("12.1.0", &ranges);
        assert!(module.starts_with("// Generated from Scripts.txt (UCD 12.1.0)"));
        assert!(module.contains("    (0x0041, 0x1A, Script::Latin),\n"));
        assert!(module.contains("    (0x10000, 0xFB, Script::LinearB),\n"));
        assert!(module.ends_with("];\n"));
    }
}
