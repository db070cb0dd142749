//! Command handlers for the text-divider CLI.
//!
//! The main dispatch logic remains in main.rs.

pub mod divide;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use text_divider::cli::is_stdio;
use text_divider::reader;

/// Read the source lines from a file, or from stdin for `-`.
pub fn read_input(path: &Path) -> Result<Vec<String>> {
    if is_stdio(path) {
        let stdin = io::stdin();
        reader::read_lines_from(stdin.lock()).context("Failed to read standard input")
    } else {
        Ok(reader::read_lines(path)?)
    }
}

/// Open the table destination: a file, or stdout for `-`.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    Ok(Box::new(BufWriter::new(file)))
}
