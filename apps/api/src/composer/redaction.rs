//! Forbidden-word redaction: whole-word, case-insensitive, applied to the final prompt.
//!
//! A match counts only when the characters on both sides are not word
//! characters (alphanumeric or `_`) or are the string edge. Masks are made of
//! `*` only, so a mask can never complete a new match.

use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::composer::normalize::{normalize, Layout};

/// Upper bound on redact/normalize passes. Passes stop early once clean.
const MAX_PASSES: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMode {
    /// Replace each hit with `*` of the same character length.
    #[default]
    Mask,
    /// Delete each hit and tidy the punctuation it leaves behind.
    Remove,
}

impl FromStr for RedactionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mask" => Ok(RedactionMode::Mask),
            "remove" => Ok(RedactionMode::Remove),
            other => Err(format!("unknown redaction mode '{other}' (expected mask|remove)")),
        }
    }
}

/// Outcome of redacting one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    pub text: String,
    pub hits: usize,
}

/// Compiled matchers for one forbidden-word list.
pub struct Redactor {
    matchers: Vec<Regex>,
    mode: RedactionMode,
}

impl Redactor {
    /// Builds matchers for `words`, longest first so multi-word entries win
    /// over their own prefixes. Entries with no alphanumeric character are ignored.
    pub fn new(words: &[String], mode: RedactionMode) -> Result<Self, regex::Error> {
        let mut words: Vec<&str> = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let matchers = words
            .into_iter()
            .map(|w| {
                RegexBuilder::new(&regex::escape(w))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { matchers, mode })
    }

    /// Redacts every whole-word hit, re-normalizing for `layout` after each
    /// pass until a pass finds nothing.
    pub fn apply(&self, text: &str, layout: Layout) -> Redaction {
        let mut current = text.to_string();
        let mut total = 0;

        for _ in 0..MAX_PASSES {
            let mut hits = 0;
            for matcher in &self.matchers {
                let (next, n) = replace_whole_words(&current, matcher, self.mode);
                current = next;
                hits += n;
            }
            if hits == 0 {
                break;
            }
            current = normalize(&current, layout);
            total += hits;
        }

        Redaction {
            text: current,
            hits: total,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

const SEPARATORS: &[char] = &[',', ';', ':'];
const TERMINATORS: &[char] = &['.', '!', '?'];

fn is_gap_char(c: char) -> bool {
    c == ' ' || c == '\t' || SEPARATORS.contains(&c)
}

/// Joins the text on both sides of a removed hit.
///
/// Only the blanks and punctuation touching the hit are rewritten. At most one
/// mark survives: a terminator if the gap held one, else the first separator.
/// A gap at the start of a line keeps no mark, so an emptied `Label:` goes
/// with its colon. Returns the offset in `text` where copying resumes.
fn close_gap(out: &mut String, text: &str, hit_end: usize) -> usize {
    let kept_len = out.trim_end_matches(is_gap_char).len();
    let left = out.split_off(kept_len);

    let rest = &text[hit_end..];
    let right_len = rest.len()
        - rest
            .trim_start_matches(|c: char| is_gap_char(c) || TERMINATORS.contains(&c))
            .len();
    let right = &rest[..right_len];
    let resume = hit_end + right_len;

    let line_start = out.is_empty() || out.ends_with('\n');
    let line_end = text[resume..].chars().next().map_or(true, |c| c == '\n');

    let marks: Vec<char> = left
        .chars()
        .chain(right.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    let mark = if line_start || out.ends_with(TERMINATORS) {
        None
    } else {
        marks
            .iter()
            .copied()
            .find(|c| TERMINATORS.contains(c))
            .or_else(|| if line_end { None } else { marks.first().copied() })
    };
    if let Some(mark) = mark {
        out.push(mark);
    }

    let is_blank = |c: char| c == ' ' || c == '\t';
    let had_blank = left.contains(is_blank) || right.contains(is_blank);
    if !line_start && !line_end && (had_blank || mark.is_some()) {
        out.push(' ');
    }
    resume
}

fn replace_whole_words(text: &str, matcher: &Regex, mode: RedactionMode) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;
    let mut hits = 0;

    while pos < text.len() {
        let Some(m) = matcher.find_at(text, pos) else {
            break;
        };
        let clear_before = text[..m.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let clear_after = text[m.end()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));

        if clear_before && clear_after && !m.as_str().is_empty() {
            out.push_str(&text[last..m.start()]);
            last = match mode {
                RedactionMode::Mask => {
                    out.push_str(&"*".repeat(m.as_str().chars().count()));
                    m.end()
                }
                RedactionMode::Remove => close_gap(&mut out, text, m.end()),
            };
            pos = last;
            hits += 1;
        } else {
            // Retry one character further so overlapping candidates are still seen.
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            pos = m.start() + step;
        }
    }

    out.push_str(&text[last..]);
    (out, hits)
}
