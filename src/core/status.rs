//! Pipeline status codes and their severity ordering.
//!
//! Analyzers report their outcome into one shared status. Severity only ever
//! rises: a write with lower severity than the recorded one is ignored, so a
//! fatal outcome cannot be hidden by a later analyzer reporting success.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// How bad an outcome is for the run as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Everything was analyzed
    Ok,
    /// Analysis finished but a detector could not reach a conclusion
    Warning,
    /// Part of the file could not be analyzed; the rest is still reported
    Error,
    /// The run cannot produce a meaningful report
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// Outcome codes reported by the analysis pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnCode {
    #[default]
    Ok,
    /// Invalid arguments passed to the run
    Arg,
    /// Input file does not exist
    FileNotExist,
    /// Input file could not be read
    FileProblem,
    /// Entry point could not be located
    EntryPointDetection,
    /// File format was not recognized
    UnknownFormat,
    /// Format parser failed on the input
    FormatParserProblem,
    /// Input is a Mach-O universal binary or static archive
    MachoArDetection,
    /// Input is a plain archive
    ArchiveDetection,
    /// No compiler or packer could be identified
    UnknownCompiler,
}

impl ReturnCode {
    pub fn severity(self) -> Severity {
        match self {
            ReturnCode::Ok => Severity::Ok,
            ReturnCode::UnknownCompiler => Severity::Warning,
            ReturnCode::EntryPointDetection
            | ReturnCode::FormatParserProblem
            | ReturnCode::MachoArDetection
            | ReturnCode::ArchiveDetection => Severity::Error,
            ReturnCode::Arg
            | ReturnCode::FileNotExist
            | ReturnCode::FileProblem
            | ReturnCode::UnknownFormat => Severity::Fatal,
        }
    }

    pub fn is_fatal(self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Stable human-readable message for reports.
    pub fn message(self) -> &'static str {
        match self {
            ReturnCode::Ok => "OK",
            ReturnCode::Arg => "invalid arguments",
            ReturnCode::FileNotExist => "input file does not exist",
            ReturnCode::FileProblem => "input file cannot be read",
            ReturnCode::EntryPointDetection => "entry point cannot be detected",
            ReturnCode::UnknownFormat => "unknown file format",
            ReturnCode::FormatParserProblem => "file format parser failed",
            ReturnCode::MachoArDetection => "input is a Mach-O universal binary or archive",
            ReturnCode::ArchiveDetection => "input is an archive",
            ReturnCode::UnknownCompiler => "compiler or packer not detected",
        }
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The shared run status with monotonic severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    code: ReturnCode,
}

impl Status {
    pub fn code(&self) -> ReturnCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Record an outcome.
    ///
    /// The new code replaces the current one when its severity is at least as
    /// high; among equally severe codes the last write wins. Returns whether
    /// the code was stored.
    pub fn record(&mut self, code: ReturnCode) -> bool {
        if code.severity() < self.code.severity() {
            warn!(
                current = ?self.code,
                refused = ?code,
                "ignoring status downgrade"
            );
            return false;
        }
        if code != self.code {
            debug!(from = ?self.code, to = ?code, "status updated");
        }
        self.code = code;
        true
    }
}
