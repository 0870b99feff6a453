//! Row processing engine
//!
//! Turns the loaded redirect table into a rule document plus the diagnostics
//! collected along the way. Per-row problems never abort the run:
//! - missing value → warning, row skipped
//! - invalid URL shape → error, row skipped
//! - old path equals new path → skipped silently (a rule would loop)
//! - old path empty or `/` → skipped silently (too broad to rewrite)
//!
//! The engine does no I/O and prints nothing; routing the diagnostics is the
//! caller's concern.

use crate::diagnostics::Diagnostic;
use crate::input::RedirectRow;
use crate::rules::{RewriteCond, RewriteRule, RuleBlock, RuleDocument};
use crate::urls::{canonicalize, is_valid_url, split_url};

/// Outcome of one generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub document: RuleDocument,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of data rows processed, emitted or not
    pub rows_read: usize,
}

impl GenerationResult {
    /// True when no row produced a warning or an error
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Processes rows in order and assembles the rule document
pub fn generate(rows: &[RedirectRow]) -> GenerationResult {
    let mut document = RuleDocument::new();
    let mut diagnostics = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let (Some(old_url), Some(new_url)) = (row.old_url.as_deref(), row.new_url.as_deref())
        else {
            diagnostics.push(Diagnostic::warning(index, "missing URL value; row skipped"));
            continue;
        };

        if !is_valid_url(old_url) || !is_valid_url(new_url) {
            diagnostics.push(Diagnostic::error(index, "invalid URL; row skipped"));
            continue;
        }

        let old = split_url(old_url);
        let new = split_url(new_url);

        // A rule mapping a path onto itself would redirect in a loop
        if old.path == new.path {
            continue;
        }

        // An empty or root pattern would capture the whole site
        if old.path.is_empty() || old.path == "/" {
            continue;
        }

        let condition =
            (!old.query.is_empty()).then(|| RewriteCond::new(canonicalize(&old.query)));

        document.push(RuleBlock {
            condition,
            rule: RewriteRule::new(&old.path, new_url),
        });
    }

    GenerationResult {
        document,
        diagnostics,
        rows_read: rows.len(),
    }
}
