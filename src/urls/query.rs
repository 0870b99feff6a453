//! Canonical query-string re-encoding
//!
//! A query condition has to match what the server sees in `%{QUERY_STRING}`,
//! so the raw query is parsed as `application/x-www-form-urlencoded` pairs,
//! grouped into a key → values multimap, and re-serialized in canonical form:
//! keys in first-occurrence order, repeated keys kept as repeated pairs,
//! values re-encoded with `+` for spaces. Pairs with an empty value are
//! dropped during parsing.

use linked_hash_map::LinkedHashMap;
use url::form_urlencoded;

/// Re-encodes a raw query string into its canonical form
///
/// May return an empty string when every pair had a blank value.
pub fn canonicalize(raw: &str) -> String {
    let mut grouped: LinkedHashMap<String, Vec<String>> = LinkedHashMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        grouped
            .entry(key.into_owned())
            .or_insert_with(Vec::new)
            .push(value.into_owned());
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in &grouped {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair_roundtrips() {
        assert_eq!(canonicalize("foo=bar"), "foo=bar");
    }

    #[test]
    fn test_repeated_keys_group_under_first_occurrence() {
        // Values of a repeated key are emitted together, at the position the
        // key first appeared
        assert_eq!(canonicalize("b=2&a=1&b=3"), "b=2&b=3&a=1");
    }

    #[test]
    fn test_blank_values_are_dropped() {
        assert_eq!(canonicalize("foo=&bar=1"), "bar=1");
        assert_eq!(canonicalize("flag&x=1"), "x=1");
        assert_eq!(canonicalize("a=&b="), "");
    }

    #[test]
    fn test_empty_query_stays_empty() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_percent_encoding_is_normalized() {
        // %20 and + both decode to a space and re-encode as +
        assert_eq!(canonicalize("q=hello%20world"), "q=hello+world");
        assert_eq!(canonicalize("q=hello+world"), "q=hello+world");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(canonicalize("next=/fr/page?x"), "next=%2Ffr%2Fpage%3Fx");
    }

    #[test]
    fn test_blank_key_with_value_is_kept() {
        assert_eq!(canonicalize("=b"), "=b");
    }
}
