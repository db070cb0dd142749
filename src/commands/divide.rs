//! Handler for the main command: tabulate the text, then run the optional exports.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use text_divider::cli::Cli;
use text_divider::export::{self, FileExporter, Format, GroupLabels, Layout};
use text_divider::{Config, Transcript};

use super::{open_output, read_input};

/// Settings for one run after merging CLI flags over the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub layout: Layout,
    pub format: Format,
    pub top: Option<usize>,
    pub suffix: String,
    pub labels: GroupLabels,
}

impl Options {
    /// CLI flags take precedence over configuration values.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            layout: cli.layout.unwrap_or(config.output.layout),
            format: cli.format.unwrap_or(config.output.format),
            top: cli.top.or(config.export.top()),
            suffix: config.export.suffix.clone(),
            labels: config.export.labels(),
        }
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli, config: &Config) -> Result<()> {
    let options = Options::resolve(cli, config);

    if cli.top.is_some() && cli.speakers.is_none() {
        warn!("--top has no effect without --speakers");
    }

    let lines = read_input(&cli.input)?;
    let transcript = Transcript::parse_with(&config.parser.parser(), &lines);

    let out = open_output(&cli.output)?;
    let rows = options
        .format
        .write(out, &transcript, options.layout)
        .with_context(|| format!("Failed to write output: {:?}", cli.output))?;
    info!(rows, "Wrote table");

    if let Some(dir) = &cli.speakers {
        let entries = export::speaker_entries(&transcript, options.top, &options.labels);
        export_entries(dir, &options.suffix, entries, "speaker")?;
    }

    if let Some(dir) = &cli.sections {
        let entries = export::section_entries(&transcript, &options.labels);
        export_entries(dir, &options.suffix, entries, "section")?;
    }

    Ok(())
}

fn export_entries(
    dir: &Path,
    suffix: &str,
    entries: Vec<(String, String)>,
    kind: &str,
) -> Result<()> {
    let written = FileExporter::new(dir)
        .with_suffix(suffix)
        .export(entries)
        .with_context(|| format!("Failed to export {} files to {:?}", kind, dir))?;
    info!(kind, files = written.len(), dir = %dir.display(), "Exported files");
    Ok(())
}
