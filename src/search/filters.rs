//! Filter detection for GitHub search queries
//!
//! Decides whether a free-form query already carries a `key:` or `key:value`
//! filter, so the search handler only injects defaults that are missing.
//! An occurrence only counts when it sits on a word boundary: at the start
//! of the query, after whitespace, or after punctuation such as `(` or `,`.
//! A preceding letter, digit or `_` rejects it (`dis:x` is not an `is:`
//! filter).
//!
//! Matching is plain string scanning with adjacent-character checks rather
//! than a regex engine, since this runs on every search request.

/// Check whether `query` contains a `filter_type:` filter with a value attached.
///
/// Every occurrence of the prefix is tried in order. One counts when it
/// starts on a word boundary and the character right after the colon is
/// not whitespace; a dangling `is:` at the end of the query or before a
/// space is not a usable filter.
pub fn has_filter(query: &str, filter_type: &str) -> bool {
    let prefix = format!("{filter_type}:");

    occurrences(query, &prefix)
        .any(|idx| starts_at_boundary(query, idx) && has_value_at(query, idx + prefix.len()))
}

/// Check whether `query` contains the exact `filter_type:filter_value` pair.
///
/// The pair must start on a word boundary and end on one too, so
/// `is:issues` does not satisfy a check for `is:issue`.
pub fn has_specific_filter(query: &str, filter_type: &str, filter_value: &str) -> bool {
    let target = format!("{filter_type}:{filter_value}");

    occurrences(query, &target)
        .any(|idx| starts_at_boundary(query, idx) && ends_at_boundary(query, idx + target.len()))
}

/// Check for a `repo:` filter
pub fn has_repo_filter(query: &str) -> bool {
    has_filter(query, "repo")
}

/// Check for a `type:` filter
pub fn has_type_filter(query: &str) -> bool {
    has_filter(query, "type")
}

/// Byte offsets of every occurrence of `needle` in `haystack`, in order.
///
/// The search resumes one character after each hit, so adjacent and
/// overlapping occurrences are all reported.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let step = needle.chars().next().map_or(1, char::len_utf8);
    let mut from = 0;

    std::iter::from_fn(move || {
        let idx = from + haystack.get(from..)?.find(needle)?;
        from = idx + step;
        Some(idx)
    })
}

/// Letters, digits and `_` glue a filter to the surrounding word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace and punctuation (`(`, `,`, `-`, `:` ...) delimit a filter.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || !is_word_char(c)
}

fn starts_at_boundary(query: &str, idx: usize) -> bool {
    query[..idx].chars().next_back().is_none_or(is_boundary)
}

fn ends_at_boundary(query: &str, end: usize) -> bool {
    query[end..].chars().next().is_none_or(is_boundary)
}

fn has_value_at(query: &str, pos: usize) -> bool {
    query[pos..].chars().next().is_some_and(|c| !c.is_whitespace())
}
