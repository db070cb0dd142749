//! CLI definitions for text-divider
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be exercised by tests without spawning the binary.

use std::path::{Path, PathBuf};

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

use crate::export::{Format, Layout};

/// Path argument meaning standard input or standard output.
pub const STDIO: &str = "-";

/// Build clap styles for consistent CLI appearance.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(name = "text-divider")]
#[command(about = "Tag every line of a marked-up text with its speaker and section")]
#[command(
    long_about = "text-divider - Divide a lightly-marked text into speakers and sections.

Reads a plain-text file and writes a tab-separated table where each line of
the text is tagged with the speaker and section it belongs to.

MARKUP:
    /Alice\"Hello there\"      Dialogue spoken by Alice
    \\said Bob quietly         Reporting clause
    <1>Chapter One            Top-level section
    <2>Part A                 Nested section (\"Chapter One - Part A\")
    (blank line)              Ends the current speaker

EXAMPLES:
    text-divider novel.txt                        Write the table to stdout
    text-divider novel.txt novel.tsv              Write the table to a file
    text-divider novel.txt --speakers speakers/   Also export one file per speaker
    text-divider novel.txt --sections chapters/   Also export one file per section
    text-divider novel.txt --speakers out/ --top 5

Configuration is read from ~/.config/text-divider/config.toml if present."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Marked-up text file to read
    #[arg(help = "Input text file (- for standard input)")]
    pub input: PathBuf,

    /// Destination of the table
    #[arg(default_value = STDIO, help = "Output file (defaults to standard output)")]
    pub output: PathBuf,

    /// Export one file per speaker into this directory
    #[arg(long, value_name = "DIR", help = "Export one text file per speaker into DIR")]
    pub speakers: Option<PathBuf>,

    /// Export one file per section into this directory
    #[arg(long, value_name = "DIR", help = "Export one text file per section into DIR")]
    pub sections: Option<PathBuf>,

    /// Export only the N most frequent speakers plus a "Minor Speakers" file
    #[arg(long, value_name = "N", help = "Keep the N most frequent speakers, merge the rest")]
    pub top: Option<usize>,

    /// Column layout of the table
    #[arg(long, value_enum, help = "Table columns (default: detected from markers)")]
    pub layout: Option<Layout>,

    /// Serialization of the table
    #[arg(long, value_enum, help = "Output format (default: tsv)")]
    pub format: Option<Format>,

    /// Configuration file to use instead of the default location
    #[arg(long, short, value_name = "FILE", help = "Read configuration from FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, help = "Log progress to stderr")]
    pub verbose: bool,
}

/// True when `path` is the `-` placeholder for stdin/stdout.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}
