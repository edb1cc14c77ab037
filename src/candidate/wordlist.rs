//! Wordlist loading

use std::path::Path;

use crate::error::{CloudSubError, Result};

/// Read a wordlist, one entry per line, each trimmed of surrounding whitespace.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Lines that are empty after
/// trimming are kept; the resulting candidates simply fail at the network
/// layer.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CloudSubError::file_access(path.to_string_lossy().to_string(), e.to_string())
    })?;

    let words: Vec<String> = content
        .replace("\r\n", "\n")
        .split_terminator(|c: char| c == '\n' || c == '\r')
        .map(|line| line.trim().to_string())
        .collect();

    tracing::debug!(path = %path.display(), entries = words.len(), "Wordlist loaded");

    Ok(words)
}
