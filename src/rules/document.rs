//! Rule document assembly
//!
//! The document is a header marker, the emitted blocks in input row order, and
//! a footer marker. It is assembled once and rendered once; rendering the same
//! document twice yields byte-identical text.

use crate::rules::rewrite::{RewriteCond, RewriteRule};
use std::fmt;

/// Opening marker line of the rule document
pub const HEADER: &str = "#### Règles de redirection";

/// Closing marker line of the rule document
pub const FOOTER: &str = "#### Fin règles de redirection";

/// One emitted block: an optional condition line plus its rule line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub condition: Option<RewriteCond>,
    pub rule: RewriteRule,
}

/// The assembled rule document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDocument {
    blocks: Vec<RuleBlock>,
}

impl RuleDocument {
    /// Creates an empty document
    pub fn new() -> Self {
        RuleDocument { blocks: Vec::new() }
    }

    /// Appends a block; blocks keep their insertion order
    pub fn push(&mut self, block: RuleBlock) {
        self.blocks.push(block);
    }

    /// Number of rule blocks (condition lines not counted)
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[RuleBlock] {
        &self.blocks
    }

    /// Renders the document: header, block lines, footer, joined by `\n`
    ///
    /// No trailing newline; the caller's line-oriented print supplies it.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.blocks.len() * 2 + 2);
        lines.push(HEADER.to_string());
        for block in &self.blocks {
            if let Some(condition) = &block.condition {
                lines.push(condition.to_string());
            }
            lines.push(block.rule.to_string());
        }
        lines.push(FOOTER.to_string());
        lines.join("\n")
    }
}

impl fmt::Display for RuleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
