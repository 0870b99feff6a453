#![forbid(unsafe_code)]

//! Redirgen: Apache rewrite-rule generation for legacy URL migrations
//!
//! Redirgen reads a semicolon-delimited CSV of old-URL/new-URL pairs and
//! produces a block of `RewriteCond`/`RewriteRule` directives, one rule per
//! valid row, skipping rows that are missing a value, fail URL shape
//! validation, or would produce a self-referential or overly broad rewrite.

pub mod cli;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod rules;
pub mod urls;

// Re-export error types for convenient access
pub use error::{InputError, RedirgenError};

// Re-export the core pipeline types for convenient access
pub use diagnostics::{Diagnostic, Severity};
pub use engine::{GenerationResult, generate};
pub use input::RedirectRow;
pub use rules::RuleDocument;
