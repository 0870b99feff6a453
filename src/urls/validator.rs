//! Syntactic URL shape validation
//!
//! A single compiled regex decides whether a string plausibly denotes an
//! absolute HTTP/HTTPS/FTP(S) URL. The check is deliberately approximate: it
//! accepts some technically invalid hosts (octets over 255 in a dotted-decimal
//! address) and rejects anything containing whitespace after the host. Rule
//! generation depends on this exact acceptance envelope, so the pattern must
//! not be swapped for a strict RFC 3986 parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_REGEX: Regex = Regex::new(
        r"(?i)^(?:http|ftp)s?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|\[?[A-F0-9]*:[A-F0-9:]+\]?)(?::\d+)?(?:/?|[/?]\S+)$"
    )
    .unwrap();
}

/// Returns whether `candidate` looks like an absolute http/https/ftp/ftps URL
///
/// Never fails; malformed input simply yields `false`.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_REGEX.is_match(candidate)
}
