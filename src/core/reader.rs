use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Practical bound on a single line's byte length. A line longer than
/// this is treated as a read failure, not scanned.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Errors raised by the line reader. The scanner never runs when one of
/// these is returned; the caller aborts with no lines supplied.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line} exceeds the {limit} byte line length bound")]
    LineTooLong { line: usize, limit: usize },
}

/// Reads an entire file into memory as an ordered vector of lines, one
/// entry per line, in file order, with line terminators stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        if line.len() > MAX_LINE_LEN {
            return Err(ReadError::LineTooLong {
                line: index + 1,
                limit: MAX_LINE_LEN,
            });
        }
        lines.push(line);
    }

    Ok(lines)
}
