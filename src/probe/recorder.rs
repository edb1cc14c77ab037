//! Hit reporting and persistence
//!
//! The recorder is owned by the engine's coordinating loop, so every print
//! and every file append happens from a single place, one line at a time.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::types::{ProbeOutcome, ProbeResult};

/// Prints hits to a console stream and appends them to the hit file
pub struct HitRecorder<W: Write> {
    console: W,
    output_file: PathBuf,
    hits: u64,
}

impl<W: Write> HitRecorder<W> {
    pub fn new(console: W, output_file: impl Into<PathBuf>) -> Self {
        Self {
            console,
            output_file: output_file.into(),
            hits: 0,
        }
    }

    /// Report the size of the sweep before it starts
    pub fn announce(&mut self, total: u64) {
        self.print_line(&format!("[*] Testing {} subdomains...", total));
    }

    /// Print and persist a VALID result; anything else is dropped silently
    pub fn record(&mut self, result: &ProbeResult) {
        let ProbeOutcome::Valid { status } = result.outcome else {
            return;
        };

        self.hits += 1;
        self.print_line(&format!("[VALID] {} ({})", result.candidate, status));

        if let Err(e) = append_line(&self.output_file, result.candidate.hostname()) {
            tracing::warn!(
                file = %self.output_file.display(),
                hostname = %result.candidate,
                error = %e,
                "Failed to append hit"
            );
        }
    }

    /// Number of hits recorded so far
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Give back the console stream
    pub fn into_console(self) -> W {
        self.console
    }

    fn print_line(&mut self, line: &str) {
        let written = self
            .console
            .write_all(format!("{}\n", line).as_bytes())
            .and_then(|_| self.console.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Open in append mode, write one full line, close.
///
/// Blocking std I/O on purpose: only the engine's coordinating loop calls
/// this, so it is the single writer. Do not replace it with a handle shared
/// across probe tasks.
fn append_line(path: &Path, hostname: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{}\n", hostname).as_bytes())
}
