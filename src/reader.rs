//! Source document loading.
//!
//! Lines are returned in document order with their trailing `\n` or `\r\n`
//! removed. A trailing newline at the end of the file does not produce an
//! extra empty line.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors raised while loading a source document.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 (line {line})", .path.display())]
    Decode { path: PathBuf, line: usize },
}

/// Read a UTF-8 file into lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let contents = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        ReadError::Decode {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;

    let lines = split_lines(&contents);
    debug!(path = %path.display(), lines = lines.len(), "Read source document");
    Ok(lines)
}

/// Read lines from any buffered reader, such as standard input.
pub fn read_lines_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Split already-loaded text into lines.
pub fn split_lines(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}
