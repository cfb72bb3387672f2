//! Option tree queries and keyboard traversal
//!
//! Pure functions over a borrowed option tree. Every operation is total:
//! lookups that fail return `None`, predicates return `false`, and nothing
//! panics, so callers can re-evaluate on every keystroke without any error
//! handling.
//!
//! Flattening and filtering disagree about disabled options on purpose:
//! [`flatten`] skips them, [`filter`] keeps them. A menu that wants both
//! behaviors composes the two calls.
//!
//! # Example
//!
//! ```rust
//! use petrel_menu::{navigator, MenuNode, OptionValue};
//!
//! let tree = vec![
//!     MenuNode::option("apple", "Apple"),
//!     MenuNode::group("Citrus", vec![
//!         MenuNode::option("lime", "Lime"),
//!         MenuNode::option("lemon", "Lemon"),
//!     ]),
//! ];
//!
//! let flat = navigator::flatten(&tree);
//! assert_eq!(flat.len(), 3);
//!
//! let next = navigator::find_next(&tree, &OptionValue::from("apple"));
//! assert_eq!(next, Some(OptionValue::from("lime")));
//! ```

use crate::matching::{is_equal, option_matches, OptionFilter};
use crate::node::{MenuNode, MenuOption, OptionGroup, OptionValue};
use crate::state::{MenuConfig, MenuState, SelectionValue, Variant};

/// Flatten the tree into its enabled options, depth-first
///
/// Groups contribute their descendants in place and are never part of the
/// result. Disabled options are skipped. Document order is preserved.
pub fn flatten(nodes: &[MenuNode]) -> Vec<&MenuOption> {
    let mut options = Vec::new();
    collect_enabled(nodes, &mut options);
    options
}

fn collect_enabled<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a MenuOption>) {
    for node in nodes {
        match node {
            MenuNode::Option(option) => {
                if !option.disabled {
                    out.push(option);
                }
            }
            MenuNode::Group(group) => collect_enabled(&group.children, out),
        }
    }
}

/// Filter the tree by the search text, preserving group structure
///
/// Options are kept when they pass the predicate; see
/// [`option_matches`](crate::matching::option_matches) for how a custom
/// filter overrides the default display-containment check. Groups are
/// rebuilt around their surviving children and vanish when none survive.
/// Disabled options are not treated specially here.
///
/// The input tree is untouched; the result is newly built.
pub fn filter(
    nodes: &[MenuNode],
    search_value: &str,
    option_filter: Option<&OptionFilter>,
) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| match node {
            MenuNode::Option(option) => option_matches(option, search_value, option_filter)
                .then(|| MenuNode::Option(option.clone())),
            MenuNode::Group(group) => {
                let children = filter(&group.children, search_value, option_filter);
                (!children.is_empty())
                    .then(|| MenuNode::Group(OptionGroup::new(group.label.clone(), children)))
            }
        })
        .collect()
}

/// Find the first enabled option whose value matches, ignoring case
pub fn find_by_value<'a>(nodes: &'a [MenuNode], value: &OptionValue) -> Option<&'a MenuOption> {
    flatten(nodes)
        .into_iter()
        .find(|option| option.value.eq_ignore_case(value))
}

/// Find the first enabled option whose display text matches, ignoring case
pub fn find_by_display<'a>(nodes: &'a [MenuNode], display: &str) -> Option<&'a MenuOption> {
    flatten(nodes)
        .into_iter()
        .find(|option| is_equal(&option.display, display))
}

/// The value following `value` in the flattened tree
///
/// Matching is strict. Returns `None` when `value` is not an enabled option
/// of the tree. At the last option the same value comes back; there is no
/// wraparound.
pub fn find_next(nodes: &[MenuNode], value: &OptionValue) -> Option<OptionValue> {
    let options = flatten(nodes);
    let index = options.iter().position(|option| &option.value == value)?;
    let next = (index + 1).min(options.len() - 1);
    Some(options[next].value.clone())
}

/// The value preceding `value` in the flattened tree
///
/// Matching is strict. Returns `None` when `value` is not an enabled option
/// of the tree. At the first option the same value comes back; there is no
/// wraparound.
pub fn find_previous(nodes: &[MenuNode], value: &OptionValue) -> Option<OptionValue> {
    let options = flatten(nodes);
    let index = options.iter().position(|option| &option.value == value)?;
    Some(options[index.saturating_sub(1)].value.clone())
}

/// Resolve which option should be highlighted for the current evaluation
///
/// The first matching rule wins:
///
/// 1. An empty flattened tree resolves to nothing.
/// 2. A changed search text resets the highlight to the first option.
/// 3. Single-selection variants with a committed value highlight exactly
///    that option, or nothing when it is gone. No fallback to the first
///    option in this branch.
/// 4. A previous highlight that still resolves is kept.
/// 5. Anything else falls back to the first option.
pub fn resolve_active_option(
    config: &MenuConfig,
    nodes: &[MenuNode],
    state: &MenuState,
) -> Option<OptionValue> {
    let options = flatten(nodes);
    let first = options.first()?;

    if config.search_value != state.search_value {
        return Some(first.value.clone());
    }

    if matches!(config.variant, Variant::Default | Variant::Combobox) && !config.value.is_empty() {
        return options
            .iter()
            .find(|option| match &config.value {
                SelectionValue::Single(value) => &option.value == value,
                // A sequence never equals a single option's value
                _ => false,
            })
            .map(|option| option.value.clone());
    }

    if let Some(active) = &state.active {
        if options
            .iter()
            .any(|option| option.value.eq_ignore_case(active))
        {
            return Some(active.clone());
        }
    }

    Some(first.value.clone())
}

/// Whether the menu should offer committing the search text as a free-text
/// entry
///
/// Only the free-text variants qualify, and only while the search text is
/// non-empty and no option displays it already.
pub fn should_allow_free_text(config: &MenuConfig, nodes: &[MenuNode]) -> bool {
    if !config.variant.allows_free_text() {
        return false;
    }
    !config.search_value.is_empty() && find_by_display(nodes, &config.search_value).is_none()
}
