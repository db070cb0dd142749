//! Markup parser for annotated transcripts.
//!
//! Turns raw lines into [`ParsedRecord`]s in a single forward pass. The
//! scanner state (active speaker, section and chapter) lives in a [`Scanner`]
//! accumulator created fresh for every call, so parsing the same lines twice
//! always yields the same records.
//!
//! # Markup
//!
//! ```text
//! <1>Chapter One            top-level section
//! <2>Part A                 nested section: "Chapter One - Part A"
//! /Alice"Hello there"       dialogue spoken by Alice
//! \said Bob quietly         reporting clause
//!                           blank line: clears the speaker
//! ```

pub mod rules;
mod types;

pub use types::{ParseOutput, ParsedRecord, SectionDepth};

use tracing::{debug, trace};

use rules::{SectionMarker, Trigger};

/// Line-classification parser.
#[derive(Debug, Clone)]
pub struct Parser {
    reporting_label: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            reporting_label: rules::REPORTING_CLAUSE.to_string(),
        }
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different speaker label for `\` reporting-clause lines.
    pub fn with_reporting_label(mut self, label: impl Into<String>) -> Self {
        self.reporting_label = label.into();
        self
    }

    pub fn reporting_label(&self) -> &str {
        &self.reporting_label
    }

    /// Parse every line into exactly one record, in input order.
    pub fn parse<I, S>(&self, lines: I) -> ParseOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let output = lines
            .into_iter()
            .fold(Scanner::new(&self.reporting_label), |mut scanner, line| {
                scanner.feed(line.as_ref());
                scanner
            })
            .finish();

        debug!(
            records = output.records.len(),
            chapters = output.depth.chapters,
            subsections = output.depth.subsections,
            "Parsed transcript"
        );
        output
    }
}

/// Parse lines with the default reporting-clause label.
pub fn parse<I, S>(lines: I) -> ParseOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::default().parse(lines)
}

/// Accumulator threaded through the lines of one parse.
#[derive(Debug)]
struct Scanner<'p> {
    reporting_label: &'p str,
    speaker: Option<String>,
    section: Option<String>,
    chapter: Option<String>,
    depth: SectionDepth,
    records: Vec<ParsedRecord>,
}

impl<'p> Scanner<'p> {
    fn new(reporting_label: &'p str) -> Self {
        Self {
            reporting_label,
            speaker: None,
            section: None,
            chapter: None,
            depth: SectionDepth::default(),
            records: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        let trigger = rules::trigger(line);
        trace!(line = self.records.len() + 1, trigger = ?trigger, "Classified line");

        let mut text = match trigger {
            Trigger::Blank => {
                self.speaker = None;
                line
            }
            Trigger::Dialogue { speaker, text } => {
                self.speaker = Some(speaker.to_string());
                text
            }
            Trigger::Reporting { text } => {
                self.speaker = Some(self.reporting_label.to_string());
                text
            }
            Trigger::Plain => line,
        };

        if self.speaker.is_some() {
            text = rules::strip_closing_quote(text);
        }

        match rules::section_marker(line) {
            Some(SectionMarker::Chapter(title)) => {
                self.depth.chapters = true;
                self.chapter = Some(title.to_string());
                self.section = Some(title.to_string());
                text = title;
            }
            Some(SectionMarker::Subsection(title)) => {
                self.depth.subsections = true;
                // No preceding <1>: the chapter part of the label is empty.
                let chapter = self.chapter.as_deref().unwrap_or_default();
                self.section = Some(format!("{} - {}", chapter, title));
                text = title;
            }
            None => {}
        }

        self.records.push(ParsedRecord::new(
            text,
            self.speaker.clone(),
            self.section.clone(),
        ));
    }

    fn finish(self) -> ParseOutput {
        ParseOutput {
            records: self.records,
            depth: self.depth,
        }
    }
}
