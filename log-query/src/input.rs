use std::{fs, io::ErrorKind, path::Path};

use tracing::debug;

use crate::error::{Error, Result};

/// Reads a whole log file, rejecting missing, binary and empty files.
pub fn read_log_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::LogFileNotFound { path: path.into() },
        _ => Error::Io {
            path: path.into(),
            source,
        },
    })?;
    if bytes.is_empty() {
        return Err(Error::EmptyLogFile { path: path.into() });
    }
    if bytes.contains(&0) {
        return Err(Error::NotText { path: path.into() });
    }
    let text = String::from_utf8(bytes).map_err(|_| Error::NotText { path: path.into() })?;
    debug!(path = %path.display(), bytes = text.len(), "read log file");
    Ok(text)
}

/// Lines without terminators; a final newline does not add an empty line.
pub fn log_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}
