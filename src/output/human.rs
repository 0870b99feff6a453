//! Human-readable diagnostic output
//!
//! One line per diagnostic, the severity keyword colored when the stream
//! supports it (yellow for warnings, red for errors).

use crate::diagnostics::{Diagnostic, Severity};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human diagnostic formatter
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Writes all diagnostics to `out`, one per line
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying stream.
    pub fn write(&self, diagnostics: &[Diagnostic], out: &mut dyn WriteColor) -> io::Result<()> {
        for diagnostic in diagnostics {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(severity_color(diagnostic.severity)))
                .set_bold(true);

            out.set_color(&spec)?;
            write!(out, "{}", diagnostic.severity)?;
            out.reset()?;
            writeln!(out, ": line {}: {}", diagnostic.row, diagnostic.message)?;
        }
        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}
