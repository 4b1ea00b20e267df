//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone in a query value (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Read the `slug` parameter from a page query string.
///
/// Accepts the string with or without its leading `?`. An empty value is
/// treated the same as a missing one.
///
/// # Examples
/// ```ignore
/// slug_from_query("?slug=hello-world") // -> Some("hello-world")
/// ```
pub fn slug_from_query(query: &str) -> Option<String> {
    query_param(query, "slug").filter(|slug| !slug.is_empty())
}

/// Look up the first value of a query parameter
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

/// Link from the index to the reader page for one post
///
/// # Examples
/// ```ignore
/// reader_url("blog.html", "a b") // -> "blog.html?slug=a%20b"
/// ```
pub fn reader_url(reader_page: &str, slug: &str) -> String {
    format!("{}?slug={}", reader_page, encode_url(slug))
}

/// Encode a query value
pub fn encode_url(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Decode a form-encoded query component (`+` is a space)
fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
