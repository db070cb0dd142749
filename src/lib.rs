//! text-divider Library
//!
//! Splits a lightly-marked plain-text document into lines tagged with their
//! speaker and section, and exports the result as a table or as one text file
//! per speaker or section.
//!
//! ```no_run
//! use text_divider::{reader, Transcript};
//!
//! let lines = reader::read_lines("novel.txt")?;
//! let transcript = Transcript::parse(&lines);
//! for summary in transcript.all_speakers() {
//!     println!("{:?}: {}", summary.speaker, summary.lines);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod parser;
pub mod reader;
pub mod transcript;

pub use config::Config;
pub use export::{FileExporter, Format, Layout};
pub use parser::{parse, ParseOutput, ParsedRecord, Parser};
pub use transcript::{SpeakerSummary, Transcript, TranscriptError};
