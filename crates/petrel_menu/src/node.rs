//! Option tree model
//!
//! Menus are described as an ordered tree of selectable options and labeled
//! groups. Trees are plain data built by the caller per render; the query
//! functions in [`crate::navigator`] never mutate them.
//!
//! # Example
//!
//! ```rust
//! use petrel_menu::MenuNode;
//!
//! let tree = vec![
//!     MenuNode::option("apple", "Apple"),
//!     MenuNode::group("Citrus", vec![
//!         MenuNode::option("lime", "Lime"),
//!         MenuNode::option("lemon", "Lemon"),
//!     ]),
//! ];
//! assert_eq!(tree.len(), 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::is_equal;

/// The value carried by an option, either text or a number
///
/// Equality (`==`) is strict: both sides must be the same kind and exactly
/// equal. Keyboard traversal and active-option resolution rely on this.
/// Case-insensitive comparison goes through [`OptionValue::eq_ignore_case`],
/// which compares the canonical string forms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
}

impl OptionValue {
    /// Whether the canonical string form is empty
    ///
    /// Numbers are never empty; `Number(0.0)` canonicalizes to `"0"`.
    pub fn is_empty(&self) -> bool {
        matches!(self, OptionValue::Text(text) if text.is_empty())
    }

    /// Case-insensitive equality on the canonical string forms
    ///
    /// An empty side never matches, so two empty values are not equal.
    pub fn eq_ignore_case(&self, other: &OptionValue) -> bool {
        is_equal(&self.to_string(), &other.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(text) => f.write_str(text),
            // Integral numbers display without a fractional part
            OptionValue::Number(n) if n.is_finite() && n.fract() == 0.0 => {
                write!(f, "{}", *n as i64)
            }
            OptionValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value as f64)
    }
}

/// A single selectable entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    /// The value committed to the selection when chosen
    pub value: OptionValue,
    /// The text shown to the user, also the default search target
    pub display: String,
    /// Disabled options are skipped by flattening and traversal
    #[serde(default)]
    pub disabled: bool,
}

impl MenuOption {
    /// Create an enabled option with a value and display text
    pub fn new(value: impl Into<OptionValue>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A labeled container of options and nested groups
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Group heading
    pub label: String,
    /// Ordered children, options or nested groups
    pub children: Vec<MenuNode>,
}

impl OptionGroup {
    /// Create a group with a label and its children
    pub fn new(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

/// A node in the option tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuNode {
    /// A selectable leaf
    Option(MenuOption),
    /// A labeled container
    Group(OptionGroup),
}

impl MenuNode {
    /// Shorthand for an enabled option node
    pub fn option(value: impl Into<OptionValue>, display: impl Into<String>) -> Self {
        MenuNode::Option(MenuOption::new(value, display))
    }

    /// Shorthand for a group node
    pub fn group(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group(OptionGroup::new(label, children))
    }

    /// The contained option, if this node is a leaf
    pub fn as_option(&self) -> Option<&MenuOption> {
        match self {
            MenuNode::Option(option) => Some(option),
            MenuNode::Group(_) => None,
        }
    }

    /// The contained group, if this node is a container
    pub fn as_group(&self) -> Option<&OptionGroup> {
        match self {
            MenuNode::Option(_) => None,
            MenuNode::Group(group) => Some(group),
        }
    }
}

impl From<MenuOption> for MenuNode {
    fn from(option: MenuOption) -> Self {
        MenuNode::Option(option)
    }
}

impl From<OptionGroup> for MenuNode {
    fn from(group: OptionGroup) -> Self {
        MenuNode::Group(group)
    }
}
