//! Operator confirmation gate for mismatched file extensions.
//!
//! The planner never reads stdin directly; it goes through [`Acknowledge`] so
//! tests can substitute a scripted responder.

use std::io::{self, BufRead, Write};

/// Exact phrase (case-insensitive) the operator must type to proceed.
pub const ACCEPT_PHRASE: &str = "continue";

/// A detected mismatch between the requested filename and the target format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatMismatch {
    /// User-supplied output file name
    pub filename: String,
    /// Its extension, lower-cased (empty when absent)
    pub extension: String,
    /// The effective target format
    pub expected: String,
}

/// Outcome of the confirmation gate. Terminal either way.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Acknowledged,
    Aborted,
}

/// Synchronous confirmation callback invoked by the planner.
pub trait Acknowledge {
    fn confirm(&mut self, mismatch: &FormatMismatch) -> io::Result<Response>;
}

/// Classify one line of operator input against [`ACCEPT_PHRASE`].
pub fn classify(line: &str) -> Response {
    if line.trim().eq_ignore_ascii_case(ACCEPT_PHRASE) {
        Response::Acknowledged
    } else {
        Response::Aborted
    }
}

/// Blocking stdin prompt. End-of-stream resolves to [`Response::Aborted`].
#[derive(Debug, Default)]
pub struct StdinAcknowledge;

impl Acknowledge for StdinAcknowledge {
    fn confirm(&mut self, mismatch: &FormatMismatch) -> io::Result<Response> {
        let mut stderr = io::stderr().lock();

        writeln!(
            stderr,
            "Warning: '{}' does not match the target format '{}'.",
            mismatch.filename, mismatch.expected
        )?;
        write!(stderr, "Type '{ACCEPT_PHRASE}' to proceed anyway: ")?;
        stderr.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;

        if read == 0 {
            return Ok(Response::Aborted);
        }

        Ok(classify(&line))
    }
}
