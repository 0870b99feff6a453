#![forbid(unsafe_code)]

//! Rewrite directive lines
//!
//! One emitted block is at most two lines: an optional `RewriteCond` gating on
//! the request's query string, and a `RewriteRule` mapping the literal old
//! path to the new URL as a permanent redirect. Both patterns are anchored
//! with `^...$` at render time.

use std::fmt;

/// Characters escaped in an emitted path pattern.
///
/// These are the pattern metacharacters, plus space because the server splits
/// directive arguments on unescaped whitespace. `-` has no meta meaning
/// outside a character class and is left alone, so `/old-page` renders as
/// `^/old-page$`.
const PATH_METACHARACTERS: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}', ' ',
];

/// Escapes a URL path for use as a literal match inside a rule pattern
pub fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if PATH_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A `RewriteCond` line matching the request's query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteCond {
    /// Canonical query string the condition matches against (may be empty)
    query: String,
}

impl RewriteCond {
    /// Creates a condition over an already-canonicalized query string
    pub fn new(query: impl Into<String>) -> Self {
        RewriteCond {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for RewriteCond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RewriteCond %{{QUERY_STRING}} ^{}$", self.query)
    }
}

/// A `RewriteRule` line redirecting one literal path to a replacement URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    /// Escaped old path, without anchors
    pattern: String,
    /// Replacement URL, emitted verbatim
    target: String,
}

impl RewriteRule {
    /// Creates a rule matching `old_path` literally and redirecting to `target`
    pub fn new(old_path: &str, target: impl Into<String>) -> Self {
        RewriteRule {
            pattern: escape_path(old_path),
            target: target.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // R=301: permanent redirect; L: stop processing rules for this request
        write!(f, "RewriteRule ^{}$ {} [R=301,L]", self.pattern, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_untouched() {
        assert_eq!(escape_path("/old-page"), "/old-page");
        assert_eq!(escape_path("/a/b/c_d"), "/a/b/c_d");
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        assert_eq!(escape_path("/page.html"), "/page\\.html");
        assert_eq!(escape_path("/a+b"), "/a\\+b");
        assert_eq!(escape_path("/a(b)[c]{d}"), "/a\\(b\\)\\[c\\]\\{d\\}");
        assert_eq!(escape_path("/x|y^z$"), "/x\\|y\\^z\\$");
        assert_eq!(escape_path("/back\\slash"), "/back\\\\slash");
    }

    #[test]
    fn test_space_is_escaped() {
        assert_eq!(escape_path("/old page"), "/old\\ page");
    }

    #[test]
    fn test_rule_line_format() {
        let rule = RewriteRule::new("/old-page", "https://example.com/new-page");
        assert_eq!(
            rule.to_string(),
            "RewriteRule ^/old-page$ https://example.com/new-page [R=301,L]"
        );
    }

    #[test]
    fn test_rule_pattern_matches_only_the_literal_path() {
        let rule = RewriteRule::new("/archive/page.php", "https://example.com/new");
        let anchored = format!("^{}$", rule.pattern());
        let re = regex::Regex::new(&anchored).unwrap();
        assert!(re.is_match("/archive/page.php"));
        assert!(!re.is_match("/archive/pageXphp"));
        assert!(!re.is_match("/archive/page.php/deeper"));
    }

    #[test]
    fn test_cond_line_format() {
        let cond = RewriteCond::new("foo=bar");
        assert_eq!(cond.to_string(), "RewriteCond %{QUERY_STRING} ^foo=bar$");
    }

    #[test]
    fn test_cond_with_empty_query() {
        let cond = RewriteCond::new("");
        assert_eq!(cond.to_string(), "RewriteCond %{QUERY_STRING} ^$");
    }
}
