// Prompt templates for the composition strategies.
// Phrase fragments live in tables.rs; this file holds only the frames.

/// Substitution template, filled by `fill_template`.
pub const SUBSTITUTION_TEMPLATE: &str = "{opener} {goal_phrase} {subject}, {tone_phrase}, \
    {audience_phrase}. {constraints} {bonus} {guidance} {quality} {closer}";

/// Sectioned ("advanced") template, one section per line.
/// Empty sections are dropped by line normalization.
pub const SECTIONED_TEMPLATE: &str = "Task: I need you to {goal_phrase} {subject}.
Tone: Write {tone_phrase}.
Audience: Tailor the response {audience_phrase}.
{constraints_section}
{focus_section}
Guidance: {guidance} {quality}";

/// Fills every `{name}` slot in one left-to-right pass.
///
/// Inserted values are never scanned again, so braces in user text stay
/// literal. A slot `lookup` does not know is copied through unchanged.
pub fn fill_template<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after
            .find('}')
            .and_then(|close| lookup(&after[..close]).map(|value| (value, close)));
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
