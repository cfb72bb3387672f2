//! Search matching predicates
//!
//! The string comparisons behind filtering and lookup. Both are
//! case-insensitive, but their treatment of empty input differs:
//! [`contains`] lets an empty query match any non-empty haystack, while
//! [`is_equal`] treats an empty side as "no match", so two empty strings are
//! never equal. Lookup by value or display depends on that asymmetry.

use crate::node::MenuOption;

/// A caller-supplied filter predicate, receiving the search text and the
/// candidate option
///
/// When supplied it fully replaces the default display-containment check.
pub type OptionFilter = dyn Fn(&str, &MenuOption) -> bool + Send + Sync;

/// Whether `haystack` contains `query`, ignoring case
///
/// The query is trimmed before comparison. An empty haystack never matches;
/// an empty or all-whitespace query matches any non-empty haystack.
pub fn contains(haystack: &str, query: &str) -> bool {
    if haystack.is_empty() {
        return false;
    }
    haystack
        .to_lowercase()
        .contains(&query.trim().to_lowercase())
}

/// Whether two strings are equal, ignoring case
///
/// An empty side never matches.
pub fn is_equal(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Whether an option passes the search predicate
///
/// A supplied `option_filter` overrides the default check of `search_value`
/// containment within the option's display text.
pub fn option_matches(
    option: &MenuOption,
    search_value: &str,
    option_filter: Option<&OptionFilter>,
) -> bool {
    match option_filter {
        Some(filter) => filter(search_value, option),
        None => contains(&option.display, search_value),
    }
}
