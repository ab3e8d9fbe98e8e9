//! Whitespace normalization and capitalization. Both layouts are idempotent.

use serde::Serialize;

/// How a strategy lays out its text, which decides what normalization keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One paragraph: every whitespace run becomes a single space.
    Inline,
    /// Line-oriented sections: whitespace collapses within lines, blank lines drop.
    Lines,
}

/// Normalizes `text` for the given layout and uppercases the first letter.
pub fn normalize(text: &str, layout: Layout) -> String {
    let collapsed = match layout {
        Layout::Inline => collapse_whitespace(text),
        Layout::Lines => text
            .lines()
            .map(collapse_whitespace)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    capitalize_first(&collapsed)
}

/// Collapses whitespace runs to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercases the first alphabetic character. Leading marks such as a
/// redaction mask are skipped.
pub fn capitalize_first(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((at, first)) => {
            let rest = &text[at + first.len_utf8()..];
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..at]);
            out.extend(first.to_uppercase());
            out.push_str(rest);
            out
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_collapses_all_whitespace() {
        let out = normalize("  i need\t\tyou \n to   help. ", Layout::Inline);
        assert_eq!(out, "I need you to help.");
    }

    #[test]
    fn test_lines_keeps_line_breaks() {
        let out = normalize("task:  do   it\n\n\n  tone:   calm  \n", Layout::Lines);
        assert_eq!(out, "Task: do it\ntone: calm");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "  hello   world  ",
            "\n\nfirst line \n  second\tline\n",
            "ünïcode  start",
            "",
            "   ",
        ];
        for layout in [Layout::Inline, Layout::Lines] {
            for s in samples {
                let once = normalize(s, layout);
                let twice = normalize(&once, layout);
                assert_eq!(once, twice, "not idempotent for {s:?} ({layout:?})");
            }
        }
    }

    #[test]
    fn test_capitalize_handles_multibyte_first_char() {
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_skips_leading_mask() {
        assert_eq!(capitalize_first("* need you"), "* Need you");
        assert_eq!(capitalize_first("****: i need"), "****: I need");
        assert_eq!(capitalize_first("*** 42"), "*** 42");
    }
}
