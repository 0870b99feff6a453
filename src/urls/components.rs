//! Lenient URL decomposition
//!
//! Splits a URL string into scheme, host, path, and query without touching the
//! text of any component: no percent re-encoding, no path normalization, an
//! empty path stays empty rather than becoming `/`. The emitted rewrite
//! patterns must reproduce the path exactly as it appeared in the input file,
//! so a normalizing parser is not usable here.
//!
//! The split is total. Strings that are not URLs at all come back with the
//! whole remainder in `path`, matching what shape validation upstream already
//! rejected.

/// Component view of a URL string
///
/// `host` is the whole authority text including any port. `query` excludes the
/// leading `?`; the fragment is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: String,
}

/// Splits `raw` into its components
pub fn split_url(raw: &str) -> UrlParts {
    match raw.split_once("://") {
        Some((scheme, rest)) => {
            let (rest, query) = split_query(rest);
            let (host, path) = match rest.find('/') {
                Some(slash) => (&rest[..slash], &rest[slash..]),
                None => (rest, ""),
            };
            UrlParts {
                scheme: scheme.to_ascii_lowercase(),
                host: host.to_string(),
                path: path.to_string(),
                query: query.to_string(),
            }
        }
        // No scheme: the whole remainder is a path
        None => {
            let (path, query) = split_query(raw);
            UrlParts {
                scheme: String::new(),
                host: String::new(),
                path: path.to_string(),
                query: query.to_string(),
            }
        }
    }
}

/// Drops the fragment, then splits off the query at the first `?`
fn split_query(s: &str) -> (&str, &str) {
    let s = match s.split_once('#') {
        Some((before, _fragment)) => before,
        None => s,
    };
    match s.split_once('?') {
        Some((before, query)) => (before, query),
        None => (s, ""),
    }
}
