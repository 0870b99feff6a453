#![forbid(unsafe_code)]

//! JSONL diagnostic output for machine-readable consumers
//!
//! Outputs one JSON object per line:
//! 1. One record per diagnostic, in row order
//! 2. One final status record summarizing the run

use crate::engine::GenerationResult;
use serde::Serialize;

/// JSONL diagnostic formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats the run's diagnostics and summary as JSONL
    pub fn format(&self, result: &GenerationResult) -> String {
        let mut output = String::new();

        for diagnostic in &result.diagnostics {
            let record = DiagnosticRecord {
                record_type: "diagnostic".to_string(),
                severity: diagnostic.severity.to_string(),
                row: diagnostic.row,
                message: diagnostic.message.clone(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let status = StatusRecord {
            record_type: "status".to_string(),
            rows_read: result.rows_read,
            rules_emitted: result.document.len(),
            rows_skipped: result.rows_read - result.document.len(),
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic record for JSONL output
#[derive(Debug, Serialize)]
struct DiagnosticRecord {
    #[serde(rename = "type")]
    record_type: String,
    severity: String,
    row: usize,
    message: String,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: String,
    rows_read: usize,
    rules_emitted: usize,
    rows_skipped: usize,
}
