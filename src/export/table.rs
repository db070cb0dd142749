//! Tabular export of parsed records.
//!
//! # Format
//!
//! ```text
//! SECTION<TAB>SPEAKER<TAB>TEXT      <- header, columns depend on the layout
//! One - A<TAB>Alice<TAB>Hello       <- one row per record
//! One - A<TAB><TAB>She left.        <- a missing speaker is an empty field
//! ```

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::parser::{ParsedRecord, SectionDepth};
use crate::transcript::Transcript;

const SPEAKER_COLUMNS: &[&str] = &["SPEAKER", "TEXT"];
const CHAPTER_COLUMNS: &[&str] = &["CHAPTER", "SPEAKER", "TEXT"];
const SECTION_COLUMNS: &[&str] = &["SECTION", "SPEAKER", "TEXT"];

/// Column set of the tabular export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pick from the section markers found in the document.
    #[default]
    Auto,
    /// SPEAKER, TEXT
    Speakers,
    /// CHAPTER, SPEAKER, TEXT
    Chapters,
    /// SECTION, SPEAKER, TEXT
    Sections,
}

impl Layout {
    /// Replace `Auto` with the layout matching the deepest marker seen.
    pub fn resolve(self, depth: SectionDepth) -> Layout {
        match self {
            Layout::Auto if depth.subsections => Layout::Sections,
            Layout::Auto if depth.chapters => Layout::Chapters,
            Layout::Auto => Layout::Speakers,
            other => other,
        }
    }

    /// Header columns. An unresolved `Auto` uses the speaker columns.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Layout::Auto | Layout::Speakers => SPEAKER_COLUMNS,
            Layout::Chapters => CHAPTER_COLUMNS,
            Layout::Sections => SECTION_COLUMNS,
        }
    }

    fn has_section_column(self) -> bool {
        matches!(self, Layout::Chapters | Layout::Sections)
    }
}

/// Serialization of the record stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Tab-separated values with a header row.
    #[default]
    Tsv,
    /// One JSON object per line.
    Json,
}

impl Format {
    /// Write the transcript in this format, returning the number of records.
    pub fn write<W: Write>(
        self,
        out: W,
        transcript: &Transcript,
        layout: Layout,
    ) -> io::Result<usize> {
        match self {
            Format::Tsv => write_table(out, transcript, layout),
            Format::Json => write_json_lines(out, transcript.records()),
        }
    }
}

/// Write a header row and one tab-separated row per record.
///
/// Missing speakers and sections are written as empty fields.
pub fn write_table<W: Write>(
    mut out: W,
    transcript: &Transcript,
    layout: Layout,
) -> io::Result<usize> {
    let layout = layout.resolve(transcript.depth());
    writeln!(out, "{}", layout.columns().join("\t"))?;

    for record in transcript.records() {
        writeln!(out, "{}", row(record, layout))?;
    }
    out.flush()?;
    Ok(transcript.len())
}

/// Write each record as a JSON object on its own line.
pub fn write_json_lines<W: Write>(mut out: W, records: &[ParsedRecord]) -> io::Result<usize> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(records.len())
}

fn row(record: &ParsedRecord, layout: Layout) -> String {
    let speaker = record.speaker.as_deref().unwrap_or_default();
    if layout.has_section_column() {
        let section = record.section.as_deref().unwrap_or_default();
        format!("{}\t{}\t{}", section, speaker, record.text)
    } else {
        format!("{}\t{}", speaker, record.text)
    }
}
