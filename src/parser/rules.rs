//! Line classification rules.
//!
//! Each rule looks only at the prefix or suffix of a single line. The scanner
//! applies them in a fixed order: trigger detection, then closing-quote
//! stripping, then section markers. Later rules overwrite what earlier ones set.

/// Leading character of a dialogue line: `/Speaker"text`.
pub const DIALOGUE_MARKER: char = '/';

/// Leading character of a reporting clause: `\said Bob`.
pub const REPORTING_MARKER: char = '\\';

/// Top-level section marker.
pub const CHAPTER_MARKER: &str = "<1>";

/// Second-level section marker, nested under the last `<1>`.
pub const SUBSECTION_MARKER: &str = "<2>";

/// Speaker assigned to reporting-clause lines.
pub const REPORTING_CLAUSE: &str = "Reporting clause";

/// Quotes that separate a dialogue speaker from the spoken text.
const OPENING_QUOTES: &[char] = &['"', '\u{201C}'];

/// Quotes stripped from the end of a spoken line.
const CLOSING_QUOTES: &[char] = &['"', '\u{201D}'];

/// How the start of a line changes the active speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger<'a> {
    /// Empty or whitespace-only line; clears the speaker.
    Blank,
    /// `/name"text`: sets the speaker to `speaker` and the text to `text`.
    Dialogue { speaker: &'a str, text: &'a str },
    /// `\text`: sets the speaker to the reporting-clause label.
    Reporting { text: &'a str },
    /// No trigger; the line keeps its text and the active speaker.
    Plain,
}

/// A section marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMarker<'a> {
    Chapter(&'a str),
    Subsection(&'a str),
}

/// Classify the speaker trigger of a line.
pub fn trigger(line: &str) -> Trigger<'_> {
    if line.trim().is_empty() {
        return Trigger::Blank;
    }
    if let Some(rest) = line.strip_prefix(DIALOGUE_MARKER) {
        let (speaker, text) = split_dialogue(rest);
        return Trigger::Dialogue { speaker, text };
    }
    if let Some(text) = line.strip_prefix(REPORTING_MARKER) {
        return Trigger::Reporting { text };
    }
    Trigger::Plain
}

/// Split the remainder of a dialogue line at its first opening quote.
///
/// Without a quote the whole remainder is the speaker and the text is empty.
pub fn split_dialogue(rest: &str) -> (&str, &str) {
    match rest.find(OPENING_QUOTES) {
        Some(idx) => {
            let quote_len = rest[idx..].chars().next().map_or(1, char::len_utf8);
            (&rest[..idx], &rest[idx + quote_len..])
        }
        None => (rest, ""),
    }
}

/// Remove one closing quote, and any whitespace after it, from the end of `text`.
///
/// Text that does not end in a closing quote is returned untouched, trailing
/// whitespace included.
pub fn strip_closing_quote(text: &str) -> &str {
    text.trim_end()
        .strip_suffix(CLOSING_QUOTES)
        .unwrap_or(text)
}

/// Detect a `<1>` or `<2>` marker at the start of a line.
pub fn section_marker(line: &str) -> Option<SectionMarker<'_>> {
    if let Some(rest) = line.strip_prefix(CHAPTER_MARKER) {
        Some(SectionMarker::Chapter(rest))
    } else {
        line.strip_prefix(SUBSECTION_MARKER)
            .map(SectionMarker::Subsection)
    }
}
