#![forbid(unsafe_code)]

//! Rewrite directive types and document assembly

pub mod document;
pub mod rewrite;

// Re-export core types
pub use document::{RuleBlock, RuleDocument};
pub use rewrite::{RewriteCond, RewriteRule, escape_path};
