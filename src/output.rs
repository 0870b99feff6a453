//! Diagnostic formatters (human and JSONL)
//!
//! Both formatters cover the diagnostic stream only. The rule document itself
//! is always rendered as plain text by [`crate::rules::RuleDocument::render`],
//! so output redirected to a rule file is never polluted with coloring or
//! JSON.

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
