//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::export::{slug, Format, GroupLabels, Layout, NONE_LABEL};
use crate::parser::rules::REPORTING_CLAUSE;
use crate::parser::Parser;
use crate::transcript::MINOR_SPEAKERS;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Markup parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Speaker assigned to `\` reporting-clause lines
    #[serde(default = "default_reporting_label")]
    pub reporting_label: String,
}

pub fn default_reporting_label() -> String {
    REPORTING_CLAUSE.to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reporting_label: default_reporting_label(),
        }
    }
}

impl ParserConfig {
    pub fn parser(&self) -> Parser {
        Parser::new().with_reporting_label(self.reporting_label.clone())
    }
}

/// Per-speaker and per-section file export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Extension appended to every exported file
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Label of the group holding speakers past the top N
    #[serde(default = "default_minor_speakers_label")]
    pub minor_speakers_label: String,
    /// Label of the missing-speaker and missing-section groups
    #[serde(default = "default_none_label")]
    pub none_label: String,
    /// Speakers exported individually; 0 exports all of them
    #[serde(default)]
    pub top_speakers: usize,
}

pub fn default_suffix() -> String {
    slug::DEFAULT_SUFFIX.to_string()
}

pub fn default_minor_speakers_label() -> String {
    MINOR_SPEAKERS.to_string()
}

pub fn default_none_label() -> String {
    NONE_LABEL.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            minor_speakers_label: default_minor_speakers_label(),
            none_label: default_none_label(),
            top_speakers: 0,
        }
    }
}

impl ExportConfig {
    /// Validate export settings.
    ///
    /// The suffix must be non-empty and must not contain a path separator.
    pub fn validate(&self) -> Result<(), String> {
        if self.suffix.is_empty() {
            return Err("export.suffix must not be empty".to_string());
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(format!(
                "export.suffix must not contain a path separator (got: {:?})",
                self.suffix
            ));
        }
        Ok(())
    }

    pub fn labels(&self) -> GroupLabels {
        GroupLabels {
            none: self.none_label.clone(),
            minor_speakers: self.minor_speakers_label.clone(),
        }
    }

    /// Configured top-N, with 0 meaning "every speaker".
    pub fn top(&self) -> Option<usize> {
        (self.top_speakers > 0).then_some(self.top_speakers)
    }
}

/// Tabular output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub format: Format,
}
