//! Selection variants and menu state snapshots
//!
//! These types carry the caller-owned inputs to active-option resolution:
//! the selection mode, the committed selection, and the search/highlight
//! state from the previous render.

use serde::{Deserialize, Serialize};

use crate::node::OptionValue;

/// Selection mode of a menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Single selection
    #[default]
    Default,
    /// Multiple selection
    Multiple,
    /// Multiple selection with free-text tag entry
    Tag,
    /// Single selection with free-text entry
    Combobox,
}

impl Variant {
    /// Whether the variant holds more than one selected value
    pub fn is_multiple(self) -> bool {
        matches!(self, Variant::Multiple | Variant::Tag)
    }

    /// Whether the variant may commit text absent from the option tree
    pub fn allows_free_text(self) -> bool {
        matches!(self, Variant::Tag | Variant::Combobox)
    }
}

/// The committed selection of a menu
///
/// Single-selection variants hold at most one scalar; multiple-selection
/// variants hold an ordered sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    /// Nothing selected
    #[default]
    None,
    /// A single selected value
    Single(OptionValue),
    /// An ordered sequence of selected values
    Multiple(Vec<OptionValue>),
}

impl SelectionValue {
    /// Whether the selection holds no usable value
    ///
    /// An empty scalar counts as absent, as does an empty sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionValue::None => true,
            SelectionValue::Single(value) => value.is_empty(),
            SelectionValue::Multiple(values) => values.is_empty(),
        }
    }

    /// Whether `candidate` is part of the selection
    ///
    /// Sequences match by membership, scalars by strict equality, and an
    /// absent or empty selection matches nothing.
    pub fn is_selected(&self, candidate: &OptionValue) -> bool {
        match self {
            SelectionValue::None => false,
            SelectionValue::Single(value) => !value.is_empty() && value == candidate,
            SelectionValue::Multiple(values) => values.contains(candidate),
        }
    }

    /// The selected values as a slice, in selection order
    pub fn values(&self) -> &[OptionValue] {
        match self {
            SelectionValue::None => &[],
            SelectionValue::Single(value) => std::slice::from_ref(value),
            SelectionValue::Multiple(values) => values,
        }
    }
}

impl From<OptionValue> for SelectionValue {
    fn from(value: OptionValue) -> Self {
        SelectionValue::Single(value)
    }
}

impl From<Vec<OptionValue>> for SelectionValue {
    fn from(values: Vec<OptionValue>) -> Self {
        SelectionValue::Multiple(values)
    }
}

/// The menu state carried over from the previous evaluation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuState {
    /// Search text at the last evaluation
    pub search_value: String,
    /// Highlighted option value at the last evaluation, if any
    pub active: Option<OptionValue>,
}

/// The caller-owned inputs for the current evaluation
#[derive(Clone, Debug, Default)]
pub struct MenuConfig {
    /// Selection mode
    pub variant: Variant,
    /// Committed selection
    pub value: SelectionValue,
    /// Current search text
    pub search_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_is_multiple() {
        assert!(Variant::Multiple.is_multiple());
        assert!(Variant::Tag.is_multiple());
        assert!(!Variant::Default.is_multiple());
        assert!(!Variant::Combobox.is_multiple());
    }

    #[test]
    fn test_variant_allows_free_text() {
        assert!(Variant::Tag.allows_free_text());
        assert!(Variant::Combobox.allows_free_text());
        assert!(!Variant::Default.allows_free_text());
        assert!(!Variant::Multiple.allows_free_text());
    }

    #[test]
    fn test_selection_is_selected_scalar() {
        let selection = SelectionValue::Single(OptionValue::from("apple"));
        assert!(selection.is_selected(&OptionValue::from("apple")));
        // Strict equality, not case-insensitive
        assert!(!selection.is_selected(&OptionValue::from("Apple")));
        assert!(!selection.is_selected(&OptionValue::from("pear")));
    }

    #[test]
    fn test_selection_is_selected_sequence() {
        let selection = SelectionValue::Multiple(vec![
            OptionValue::from("a"),
            OptionValue::from(2i64),
        ]);
        assert!(selection.is_selected(&OptionValue::from("a")));
        assert!(selection.is_selected(&OptionValue::Number(2.0)));
        assert!(!selection.is_selected(&OptionValue::from("2")));
    }

    #[test]
    fn test_selection_absent_matches_nothing() {
        assert!(!SelectionValue::None.is_selected(&OptionValue::from("a")));
        let empty = SelectionValue::Single(OptionValue::from(""));
        assert!(!empty.is_selected(&OptionValue::from("")));
    }

    #[test]
    fn test_selection_is_empty() {
        assert!(SelectionValue::None.is_empty());
        assert!(SelectionValue::Single(OptionValue::from("")).is_empty());
        assert!(SelectionValue::Multiple(Vec::new()).is_empty());
        assert!(!SelectionValue::Single(OptionValue::from("a")).is_empty());
        assert!(!SelectionValue::Multiple(vec![OptionValue::from("a")]).is_empty());
    }

    #[test]
    fn test_selection_values_slice() {
        assert!(SelectionValue::None.values().is_empty());
        let single = SelectionValue::Single(OptionValue::from("a"));
        assert_eq!(single.values().len(), 1);
        let multiple = SelectionValue::from(vec![OptionValue::from("a"), OptionValue::from("b")]);
        assert_eq!(multiple.values().len(), 2);
    }

    #[test]
    fn test_selection_deserializes_untagged() {
        let single: SelectionValue = serde_json::from_str(r#""apple""#).unwrap();
        assert_eq!(single, SelectionValue::Single(OptionValue::from("apple")));

        let multiple: SelectionValue = serde_json::from_str(r#"["a", 2]"#).unwrap();
        assert_eq!(
            multiple,
            SelectionValue::Multiple(vec![OptionValue::from("a"), OptionValue::Number(2.0)])
        );
    }
}
