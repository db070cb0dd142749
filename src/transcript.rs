//! Aggregated views over a parsed transcript.
//!
//! A missing speaker or section is a grouping key like any other: lines
//! outside any dialogue form the `None` speaker group, and lines before the
//! first section marker form the `None` section group.

use std::collections::HashMap;

use crate::parser::{ParseOutput, ParsedRecord, Parser, SectionDepth};

/// Label of the synthetic group collecting every speaker past the top N.
pub const MINOR_SPEAKERS: &str = "Minor Speakers";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("No lines found for speaker {}", describe(.speaker))]
    SpeakerNotFound { speaker: Option<String> },
}

fn describe(speaker: &Option<String>) -> String {
    match speaker {
        Some(name) => format!("'{}'", name),
        None => "<none>".to_string(),
    }
}

/// Number of lines attributed to one speaker value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerSummary {
    pub speaker: Option<String>,
    pub lines: usize,
}

/// A speaker group in an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerGroup {
    /// A single speaker value, `None` included.
    Speaker(Option<String>),
    /// Every speaker ranked below the top N.
    Minor,
}

/// A speaker group with all of its text joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerText {
    pub group: SpeakerGroup,
    pub lines: usize,
    pub text: String,
}

/// All text under one section label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionText {
    pub section: Option<String>,
    pub text: String,
}

/// Parsed records plus the section depth seen while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    records: Vec<ParsedRecord>,
    depth: SectionDepth,
}

impl From<ParseOutput> for Transcript {
    fn from(output: ParseOutput) -> Self {
        Self {
            records: output.records,
            depth: output.depth,
        }
    }
}

impl Transcript {
    /// Parse lines with the default parser settings.
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_with(&Parser::default(), lines)
    }

    pub fn parse_with<I, S>(parser: &Parser, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parser.parse(lines).into()
    }

    pub fn records(&self) -> &[ParsedRecord] {
        &self.records
    }

    pub fn depth(&self) -> SectionDepth {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Line counts per distinct speaker, most lines first.
    ///
    /// Speakers with equal counts keep the order in which they first appear.
    pub fn all_speakers(&self) -> Vec<SpeakerSummary> {
        let mut index: HashMap<Option<&str>, usize> = HashMap::new();
        let mut summaries: Vec<SpeakerSummary> = Vec::new();

        for record in &self.records {
            let key = record.speaker.as_deref();
            match index.get(&key) {
                Some(&i) => summaries[i].lines += 1,
                None => {
                    index.insert(key, summaries.len());
                    summaries.push(SpeakerSummary {
                        speaker: record.speaker.clone(),
                        lines: 1,
                    });
                }
            }
        }

        // Stable sort: ties stay in first-appearance order.
        summaries.sort_by(|a, b| b.lines.cmp(&a.lines));
        summaries
    }

    /// Every line of `speaker`, joined with single spaces in document order.
    pub fn speaker_text(&self, speaker: Option<&str>) -> Result<String, TranscriptError> {
        let texts: Vec<&str> = self
            .records
            .iter()
            .filter(|r| r.speaker.as_deref() == speaker)
            .map(|r| r.text.as_str())
            .collect();

        if texts.is_empty() {
            return Err(TranscriptError::SpeakerNotFound {
                speaker: speaker.map(str::to_string),
            });
        }
        Ok(texts.join(" "))
    }

    /// Every speaker with its joined text, most lines first.
    pub fn speakers(&self) -> Vec<SpeakerText> {
        self.all_speakers()
            .into_iter()
            .map(|summary| self.speaker_entry(summary))
            .collect()
    }

    /// The `n` most frequent speakers, followed by one [`SpeakerGroup::Minor`]
    /// entry holding everyone else.
    ///
    /// The minor entry is always present; its text is empty when `n` covers
    /// every speaker.
    pub fn top_speakers(&self, n: usize) -> Vec<SpeakerText> {
        let mut entries = self.speakers();
        let rest = if n < entries.len() {
            entries.split_off(n)
        } else {
            Vec::new()
        };

        let minor = SpeakerText {
            group: SpeakerGroup::Minor,
            lines: rest.iter().map(|e| e.lines).sum(),
            text: rest
                .iter()
                .map(|e| e.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        };
        entries.push(minor);
        entries
    }

    /// Distinct section labels in order of first appearance.
    pub fn all_sections(&self) -> Vec<Option<&str>> {
        let mut sections: Vec<Option<&str>> = Vec::new();
        for record in &self.records {
            let section = record.section.as_deref();
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        sections
    }

    /// Every line under `section`, joined with single spaces in document order.
    ///
    /// An unknown label yields an empty string.
    pub fn section_text(&self, section: Option<&str>) -> String {
        self.records
            .iter()
            .filter(|r| r.section.as_deref() == section)
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Joined text for every distinct section.
    pub fn sections(&self) -> Vec<SectionText> {
        self.all_sections()
            .into_iter()
            .map(|section| SectionText {
                section: section.map(str::to_string),
                text: self.section_text(section),
            })
            .collect()
    }

    fn speaker_entry(&self, summary: SpeakerSummary) -> SpeakerText {
        let text = self
            .records
            .iter()
            .filter(|r| r.speaker == summary.speaker)
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        SpeakerText {
            group: SpeakerGroup::Speaker(summary.speaker),
            lines: summary.lines,
            text,
        }
    }
}
