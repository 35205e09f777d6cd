//! String normalization and case-insensitive matching helpers
//!
//! Every name and label entering the store passes through
//! [`normalize`]. Case-insensitive comparison is defined byte-wise
//! after lowercasing ASCII letters; non-ASCII characters compare
//! verbatim.

/// Trim leading/trailing whitespace and collapse internal whitespace
/// runs to a single space.
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(input: &str, max: usize) -> &str {
    match input.char_indices().nth(max) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// ASCII case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive prefix check.
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.to_ascii_lowercase()
        .starts_with(&prefix.to_ascii_lowercase())
}

/// ASCII case-insensitive substring check.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
