//! Structured per-row diagnostics
//!
//! The generation engine never prints. Every non-fatal problem it meets while
//! walking the redirect table becomes a [`Diagnostic`] carrying the severity,
//! the row number as the user sees it in a spreadsheet, and a message. The
//! caller decides where the collected diagnostics go (stderr, JSONL, nowhere).

use serde::Serialize;
use std::fmt;

/// Offset from a 0-based data row index to the row number shown to the user:
/// one for the header row, one for 1-based display.
pub const ROW_DISPLAY_OFFSET: usize = 2;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single non-fatal problem attached to one input row
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Display row number (data index + header row + 1-based numbering)
    pub row: usize,
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning for the data row at `index` (0-based)
    pub fn warning(index: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            row: index + ROW_DISPLAY_OFFSET,
            message: message.into(),
        }
    }

    /// Creates an error for the data row at `index` (0-based)
    pub fn error(index: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            row: index + ROW_DISPLAY_OFFSET,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: line {}: {}", self.severity, self.row, self.message)
    }
}
