//! Exporters for parsed transcripts.
//!
//! - [`table`]: the per-line TSV (or JSON lines) stream
//! - [`files`]: one text file per speaker or section
//! - [`slug`]: label to filename conversion

pub mod files;
pub mod slug;
pub mod table;

pub use files::{ExportError, FileExporter};
pub use slug::slugify;
pub use table::{write_json_lines, write_table, Format, Layout};

use crate::transcript::{SpeakerGroup, Transcript, MINOR_SPEAKERS};

/// Label used for the missing-speaker and missing-section groups.
pub const NONE_LABEL: &str = "None";

/// Names given to groups that have no label of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLabels {
    pub none: String,
    pub minor_speakers: String,
}

impl Default for GroupLabels {
    fn default() -> Self {
        Self {
            none: NONE_LABEL.to_string(),
            minor_speakers: MINOR_SPEAKERS.to_string(),
        }
    }
}

impl GroupLabels {
    pub fn speaker(&self, group: &SpeakerGroup) -> String {
        match group {
            SpeakerGroup::Speaker(Some(name)) => name.clone(),
            SpeakerGroup::Speaker(None) => self.none.clone(),
            SpeakerGroup::Minor => self.minor_speakers.clone(),
        }
    }

    pub fn section(&self, section: Option<&str>) -> String {
        section.unwrap_or(self.none.as_str()).to_string()
    }
}

/// `(label, text)` pairs for the speaker export.
///
/// `top` of `None` exports every speaker; `Some(n)` exports the `n` most
/// frequent plus one minor-speakers entry.
pub fn speaker_entries(
    transcript: &Transcript,
    top: Option<usize>,
    labels: &GroupLabels,
) -> Vec<(String, String)> {
    let groups = match top {
        Some(n) => transcript.top_speakers(n),
        None => transcript.speakers(),
    };
    groups
        .into_iter()
        .map(|entry| (labels.speaker(&entry.group), entry.text))
        .collect()
}

/// `(label, text)` pairs for the section export, in first-appearance order.
pub fn section_entries(transcript: &Transcript, labels: &GroupLabels) -> Vec<(String, String)> {
    transcript
        .sections()
        .into_iter()
        .map(|entry| (labels.section(entry.section.as_deref()), entry.text))
        .collect()
}
