//! Record types produced by the markup parser.

use serde::{Deserialize, Serialize};

/// One annotated line of the source document.
///
/// Every input line produces exactly one record, blank lines included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Line text after markup has been removed.
    pub text: String,
    /// Speaker active for this line, if any.
    pub speaker: Option<String>,
    /// Section label active for this line, if any.
    pub section: Option<String>,
}

impl ParsedRecord {
    pub fn new(text: impl Into<String>, speaker: Option<String>, section: Option<String>) -> Self {
        Self {
            text: text.into(),
            speaker,
            section,
        }
    }
}

/// Section depths observed while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionDepth {
    /// At least one `<1>` marker was seen.
    pub chapters: bool,
    /// At least one `<2>` marker was seen.
    pub subsections: bool,
}

/// Result of a full parse: the records plus what markup was encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub records: Vec<ParsedRecord>,
    pub depth: SectionDepth,
}
