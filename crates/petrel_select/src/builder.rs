//! Fluent construction of select state
//!
//! # Example
//!
//! ```rust
//! use petrel_select::select;
//! use petrel_menu::Variant;
//!
//! let state = select()
//!     .variant(Variant::Multiple)
//!     .option("us", "United States")
//!     .option_disabled("uk", "United Kingdom")
//!     .group("Nordics", |group| {
//!         group.option("se", "Sweden").option("no", "Norway")
//!     })
//!     .selected("se")
//!     .build();
//!
//! assert!(state.is_selected(&"se".into()));
//! ```

use std::sync::Arc;

use petrel_menu::{
    MenuNode, MenuOption, OptionFilter, OptionValue, SelectionValue, Variant,
};

use crate::state::{ChangeCallback, SelectState};

/// Builder for [`SelectState`]
#[derive(Default)]
pub struct SelectBuilder {
    variant: Variant,
    nodes: Vec<MenuNode>,
    selected: Vec<OptionValue>,
    on_change: Option<ChangeCallback>,
    option_filter: Option<Arc<OptionFilter>>,
}

impl SelectBuilder {
    /// Create an empty builder for the default single-selection variant
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Add an option with a value and display text
    pub fn option(mut self, value: impl Into<OptionValue>, display: impl Into<String>) -> Self {
        self.nodes.push(MenuNode::option(value, display));
        self
    }

    /// Add a disabled option
    pub fn option_disabled(
        mut self,
        value: impl Into<OptionValue>,
        display: impl Into<String>,
    ) -> Self {
        self.nodes
            .push(MenuNode::Option(MenuOption::new(value, display).disabled()));
        self
    }

    /// Add a pre-built option
    pub fn add_option(mut self, option: MenuOption) -> Self {
        self.nodes.push(MenuNode::Option(option));
        self
    }

    /// Add multiple pre-built options
    pub fn options(mut self, options: impl IntoIterator<Item = MenuOption>) -> Self {
        self.nodes
            .extend(options.into_iter().map(MenuNode::Option));
        self
    }

    /// Add a labeled group built through a nested builder
    pub fn group<F>(mut self, label: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(GroupBuilder) -> GroupBuilder,
    {
        let group = build(GroupBuilder::default());
        self.nodes.push(MenuNode::group(label, group.children));
        self
    }

    /// Pre-select a value
    ///
    /// May be called repeatedly for multiple-selection variants; single
    /// variants keep the first value given.
    pub fn selected(mut self, value: impl Into<OptionValue>) -> Self {
        self.selected.push(value.into());
        self
    }

    /// Set the selection-change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SelectionValue) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Replace the default search predicate for this select
    pub fn filter_with<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, &MenuOption) -> bool + Send + Sync + 'static,
    {
        self.option_filter = Some(Arc::new(filter));
        self
    }

    /// Build the select state and resolve the initial highlight
    pub fn build(self) -> SelectState {
        let selection = if self.variant.is_multiple() {
            if self.selected.is_empty() {
                SelectionValue::None
            } else {
                SelectionValue::Multiple(self.selected)
            }
        } else {
            match self.selected.into_iter().next() {
                Some(value) => SelectionValue::Single(value),
                None => SelectionValue::None,
            }
        };
        SelectState::with_parts(
            self.variant,
            self.nodes,
            selection,
            self.on_change,
            self.option_filter,
        )
    }
}

/// Nested builder for the children of one group
#[derive(Default)]
pub struct GroupBuilder {
    children: Vec<MenuNode>,
}

impl GroupBuilder {
    /// Add an option to this group
    pub fn option(mut self, value: impl Into<OptionValue>, display: impl Into<String>) -> Self {
        self.children.push(MenuNode::option(value, display));
        self
    }

    /// Add a disabled option to this group
    pub fn option_disabled(
        mut self,
        value: impl Into<OptionValue>,
        display: impl Into<String>,
    ) -> Self {
        self.children
            .push(MenuNode::Option(MenuOption::new(value, display).disabled()));
        self
    }

    /// Add a nested group
    pub fn group<F>(mut self, label: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(GroupBuilder) -> GroupBuilder,
    {
        let group = build(GroupBuilder::default());
        self.children.push(MenuNode::group(label, group.children));
        self
    }
}

/// Create a select builder
pub fn select() -> SelectBuilder {
    SelectBuilder::new()
}
