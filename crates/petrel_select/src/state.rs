//! Headless select state
//!
//! [`SelectState`] owns what the menu core deliberately does not: the
//! committed selection, the search text, the highlighted option, and the
//! open flag. UI event handlers call the command methods (keystroke, arrow
//! key, click, chip removal) and re-render from the query methods; all menu
//! semantics are delegated to `petrel_menu`.

use std::fmt;
use std::sync::Arc;

use petrel_menu::{
    navigator, MenuConfig, MenuNode, MenuState, OptionFilter, OptionValue, SelectionValue, Variant,
};

use crate::error::{Result, SelectError};
use crate::tag::Tag;

/// Callback invoked with the new selection after every change
pub type ChangeCallback = Arc<dyn Fn(&SelectionValue) + Send + Sync>;

/// Event-driven state for a searchable select menu
pub struct SelectState {
    variant: Variant,
    tree: Vec<MenuNode>,
    selection: SelectionValue,
    search_value: String,
    active: Option<OptionValue>,
    open: bool,
    on_change: Option<ChangeCallback>,
    option_filter: Option<Arc<OptionFilter>>,
}

impl SelectState {
    /// Create an empty select state for a variant
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            tree: Vec::new(),
            selection: SelectionValue::None,
            search_value: String::new(),
            active: None,
            open: false,
            on_change: None,
            option_filter: None,
        }
    }

    pub(crate) fn with_parts(
        variant: Variant,
        tree: Vec<MenuNode>,
        selection: SelectionValue,
        on_change: Option<ChangeCallback>,
        option_filter: Option<Arc<OptionFilter>>,
    ) -> Self {
        let mut state = Self {
            variant,
            tree,
            selection,
            search_value: String::new(),
            active: None,
            open: false,
            on_change,
            option_filter,
        };
        state.refresh_active();
        state
    }

    /// Selection mode of this select
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The full option tree, unfiltered
    pub fn tree(&self) -> &[MenuNode] {
        &self.tree
    }

    /// The committed selection
    pub fn selection(&self) -> &SelectionValue {
        &self.selection
    }

    /// Current search text
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// Currently highlighted option value, if any
    pub fn active(&self) -> Option<&OptionValue> {
        self.active.as_ref()
    }

    /// Whether the menu is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replace the option tree, keeping the highlight where possible
    pub fn set_tree(&mut self, tree: Vec<MenuNode>) {
        self.tree = tree;
        self.refresh_active();
    }

    /// The nodes a menu should render for the current search text
    ///
    /// An empty search skips filtering entirely, so every node is visible
    /// regardless of the filter predicate in use.
    pub fn visible_nodes(&self) -> Vec<MenuNode> {
        self.filtered_with(&self.search_value)
    }

    /// Whether `value` is part of the committed selection
    pub fn is_selected(&self, value: &OptionValue) -> bool {
        self.selection.is_selected(value)
    }

    /// Display text of the enabled option holding `value`, if any
    pub fn display_for(&self, value: &OptionValue) -> Option<String> {
        navigator::find_by_value(&self.tree, value).map(|option| option.display.clone())
    }

    /// Whether the current search text may be committed as free text
    pub fn free_text_allowed(&self) -> bool {
        navigator::should_allow_free_text(&self.config(), &self.tree)
    }

    /// One removable chip per selected value, in selection order
    ///
    /// Values without a matching enabled option (free-text tags) fall back
    /// to their canonical form as display text. Chips are plain data; wire
    /// [`Tag::on_deselect`] in the presentation layer to route removal back
    /// to [`SelectState::deselect`].
    pub fn tags(&self) -> Vec<Tag> {
        self.selection
            .values()
            .iter()
            .map(|value| {
                let display = self
                    .display_for(value)
                    .unwrap_or_else(|| value.to_string());
                Tag::new(value.clone(), display)
            })
            .collect()
    }

    /// Open the menu and resolve the highlight
    pub fn open_menu(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.refresh_active();
        tracing::debug!(variant = ?self.variant, "menu opened");
    }

    /// Close the menu, clearing search text and highlight
    pub fn close_menu(&mut self) {
        self.open = false;
        self.search_value.clear();
        self.active = None;
        tracing::debug!("menu closed");
    }

    /// Apply a new search text and re-resolve the highlight
    ///
    /// A changed text resets the highlight to the first visible option; an
    /// unchanged text keeps it.
    pub fn search_changed(&mut self, text: impl Into<String>) {
        let text = text.into();
        let config = MenuConfig {
            variant: self.variant,
            value: self.selection.clone(),
            search_value: text.clone(),
        };
        let previous = MenuState {
            search_value: self.search_value.clone(),
            active: self.active.clone(),
        };
        let visible = self.filtered_with(&text);
        self.active = navigator::resolve_active_option(&config, &visible, &previous);
        self.search_value = text;
        tracing::trace!(search = %self.search_value, active = ?self.active, "search changed");
    }

    /// Move the highlight to the next visible option, clamped at the end
    pub fn next_active(&mut self) {
        self.step_active(navigator::find_next);
    }

    /// Move the highlight to the previous visible option, clamped at the
    /// start
    pub fn previous_active(&mut self) {
        self.step_active(navigator::find_previous);
    }

    /// Commit the highlighted option
    pub fn select_active(&mut self) -> Result<OptionValue> {
        let active = self.active.clone().ok_or(SelectError::NoActiveOption)?;
        self.select(active.clone())?;
        Ok(active)
    }

    /// Commit an option by value
    ///
    /// Single variants replace the selection and close the menu. Multiple
    /// variants toggle membership, clear the search text, and leave the
    /// menu open for further picks.
    pub fn select(&mut self, value: impl Into<OptionValue>) -> Result<()> {
        let requested = value.into();
        let Some(option) = navigator::find_by_value(&self.tree, &requested) else {
            return Err(SelectError::UnknownOption(requested.to_string()));
        };
        let value = option.value.clone();

        if self.variant.is_multiple() {
            self.toggle_membership(value);
            self.search_value.clear();
            self.refresh_active();
        } else {
            self.selection = SelectionValue::Single(value);
            self.close_menu();
        }
        self.emit_change();
        Ok(())
    }

    /// Remove a value from the selection
    pub fn deselect(&mut self, value: &OptionValue) -> Result<()> {
        if !self.selection.is_selected(value) {
            return Err(SelectError::NotSelected(value.to_string()));
        }
        match &mut self.selection {
            SelectionValue::Multiple(values) => {
                if let Some(index) = values.iter().position(|held| held == value) {
                    values.remove(index);
                }
            }
            _ => self.selection = SelectionValue::None,
        }
        self.emit_change();
        Ok(())
    }

    /// Commit the trimmed search text as a value absent from the tree
    ///
    /// Permitted only on free-text variants while the search text matches
    /// no option's display.
    pub fn commit_free_text(&mut self) -> Result<OptionValue> {
        if !self.free_text_allowed() {
            return Err(SelectError::FreeTextNotAllowed(self.variant));
        }
        let value = OptionValue::from(self.search_value.trim());

        if self.variant.is_multiple() {
            self.insert_membership(value.clone());
            self.search_value.clear();
            self.refresh_active();
        } else {
            self.selection = SelectionValue::Single(value.clone());
            self.close_menu();
        }
        self.emit_change();
        tracing::debug!(value = %value, "free text committed");
        Ok(value)
    }

    fn config(&self) -> MenuConfig {
        MenuConfig {
            variant: self.variant,
            value: self.selection.clone(),
            search_value: self.search_value.clone(),
        }
    }

    fn filtered_with(&self, search_value: &str) -> Vec<MenuNode> {
        if search_value.is_empty() {
            self.tree.clone()
        } else {
            navigator::filter(&self.tree, search_value, self.option_filter.as_deref())
        }
    }

    fn refresh_active(&mut self) {
        let config = self.config();
        let previous = MenuState {
            search_value: self.search_value.clone(),
            active: self.active.clone(),
        };
        let visible = self.visible_nodes();
        self.active = navigator::resolve_active_option(&config, &visible, &previous);
    }

    fn step_active(&mut self, step: fn(&[MenuNode], &OptionValue) -> Option<OptionValue>) {
        let visible = self.visible_nodes();
        let stepped = self
            .active
            .as_ref()
            .and_then(|active| step(&visible, active));
        // A missing or stale highlight lands on the first visible option
        self.active = stepped.or_else(|| {
            navigator::flatten(&visible)
                .first()
                .map(|option| option.value.clone())
        });
    }

    fn toggle_membership(&mut self, value: OptionValue) {
        let mut values = match std::mem::take(&mut self.selection) {
            SelectionValue::Multiple(values) => values,
            SelectionValue::Single(single) => vec![single],
            SelectionValue::None => Vec::new(),
        };
        if let Some(index) = values.iter().position(|held| held == &value) {
            values.remove(index);
        } else {
            values.push(value);
        }
        self.selection = SelectionValue::Multiple(values);
    }

    fn insert_membership(&mut self, value: OptionValue) {
        if !self.selection.is_selected(&value) {
            self.toggle_membership(value);
        }
    }

    fn emit_change(&self) {
        if let Some(callback) = &self.on_change {
            callback(&self.selection);
        }
        tracing::trace!(selection = ?self.selection, "selection changed");
    }
}

impl fmt::Debug for SelectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("variant", &self.variant)
            .field("selection", &self.selection)
            .field("search_value", &self.search_value)
            .field("active", &self.active)
            .field("open", &self.open)
            .field("on_change", &self.on_change.is_some())
            .field("option_filter", &self.option_filter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::select;
    use std::sync::Mutex;

    fn fruit_select(variant: Variant) -> SelectState {
        select()
            .variant(variant)
            .option("apple", "Apple")
            .group("Berries", |group| {
                group
                    .option_disabled("straw", "Strawberry")
                    .option("blue", "Blueberry")
            })
            .option("cherry", "Cherry")
            .build()
    }

    #[test]
    fn test_initial_highlight_is_first_enabled_option() {
        let state = fruit_select(Variant::Default);
        assert_eq!(state.active(), Some(&OptionValue::from("apple")));
        assert!(!state.is_open());
    }

    #[test]
    fn test_visible_nodes_without_search_skips_filtering() {
        let state = fruit_select(Variant::Default);
        let visible = state.visible_nodes();
        assert_eq!(visible.len(), 3);
        // Disabled options stay visible
        let berries = visible[1].as_group().unwrap();
        assert_eq!(berries.children.len(), 2);
    }

    #[test]
    fn test_search_narrows_and_resets_highlight() {
        let mut state = fruit_select(Variant::Default);
        state.open_menu();
        state.search_changed("blue");

        let visible = state.visible_nodes();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].as_group().unwrap().label, "Berries");
        assert_eq!(state.active(), Some(&OptionValue::from("blue")));
    }

    #[test]
    fn test_unchanged_search_keeps_highlight() {
        let mut state = fruit_select(Variant::Multiple);
        state.open_menu();
        state.next_active();
        assert_eq!(state.active(), Some(&OptionValue::from("blue")));
        state.search_changed("");
        assert_eq!(state.active(), Some(&OptionValue::from("blue")));
    }

    #[test]
    fn test_arrow_keys_clamp_at_both_ends() {
        let mut state = fruit_select(Variant::Default);
        state.open_menu();

        state.previous_active();
        assert_eq!(state.active(), Some(&OptionValue::from("apple")));

        state.next_active();
        state.next_active();
        state.next_active();
        // Disabled Strawberry is skipped and the end clamps
        assert_eq!(state.active(), Some(&OptionValue::from("cherry")));
    }

    #[test]
    fn test_single_select_replaces_and_closes() {
        let mut state = fruit_select(Variant::Default);
        state.open_menu();
        state.search_changed("cher");
        state.select("cherry").unwrap();

        assert!(!state.is_open());
        assert_eq!(state.search_value(), "");
        assert!(state.is_selected(&OptionValue::from("cherry")));

        state.open_menu();
        state.select("apple").unwrap();
        assert!(state.is_selected(&OptionValue::from("apple")));
        assert!(!state.is_selected(&OptionValue::from("cherry")));
    }

    #[test]
    fn test_multiple_select_toggles_and_stays_open() {
        let mut state = fruit_select(Variant::Multiple);
        state.open_menu();
        state.select("apple").unwrap();
        state.select("blue").unwrap();

        assert!(state.is_open());
        assert!(state.is_selected(&OptionValue::from("apple")));
        assert!(state.is_selected(&OptionValue::from("blue")));

        // Selecting again deselects
        state.select("apple").unwrap();
        assert!(!state.is_selected(&OptionValue::from("apple")));
        assert!(state.is_selected(&OptionValue::from("blue")));
    }

    #[test]
    fn test_select_rejects_unknown_and_disabled() {
        let mut state = fruit_select(Variant::Default);
        assert_eq!(
            state.select("durian"),
            Err(SelectError::UnknownOption("durian".to_string()))
        );
        // Disabled options cannot be committed
        assert_eq!(
            state.select("straw"),
            Err(SelectError::UnknownOption("straw".to_string()))
        );
    }

    #[test]
    fn test_select_active_commits_highlight() {
        let mut state = fruit_select(Variant::Default);
        state.open_menu();
        state.next_active();
        let value = state.select_active().unwrap();
        assert_eq!(value, OptionValue::from("blue"));
        assert!(state.is_selected(&value));
    }

    #[test]
    fn test_select_active_without_highlight_errors() {
        let mut state = SelectState::new(Variant::Default);
        assert_eq!(state.select_active(), Err(SelectError::NoActiveOption));
    }

    #[test]
    fn test_deselect_removes_membership() {
        let mut state = fruit_select(Variant::Multiple);
        state.select("apple").unwrap();
        state.select("blue").unwrap();

        state.deselect(&OptionValue::from("apple")).unwrap();
        assert!(!state.is_selected(&OptionValue::from("apple")));
        assert!(state.is_selected(&OptionValue::from("blue")));

        assert_eq!(
            state.deselect(&OptionValue::from("apple")),
            Err(SelectError::NotSelected("apple".to_string()))
        );
    }

    #[test]
    fn test_deselect_clears_single_selection() {
        let mut state = fruit_select(Variant::Default);
        state.select("apple").unwrap();
        state.deselect(&OptionValue::from("apple")).unwrap();
        assert_eq!(state.selection(), &SelectionValue::None);
    }

    #[test]
    fn test_tags_reflect_selection_order() {
        let mut state = fruit_select(Variant::Tag);
        state.select("blue").unwrap();
        state.select("apple").unwrap();

        let tags = state.tags();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].display(), "Blueberry");
        assert_eq!(tags[1].display(), "Apple");
    }

    #[test]
    fn test_free_text_tag_commits_and_falls_back_to_canonical_display() {
        let mut state = fruit_select(Variant::Tag);
        state.open_menu();
        state.search_changed("  dragonfruit  ");
        assert!(state.free_text_allowed());

        let value = state.commit_free_text().unwrap();
        assert_eq!(value, OptionValue::from("dragonfruit"));
        assert!(state.is_selected(&value));
        assert_eq!(state.search_value(), "");

        let tags = state.tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].display(), "dragonfruit");
    }

    #[test]
    fn test_free_text_combobox_replaces_and_closes() {
        let mut state = fruit_select(Variant::Combobox);
        state.open_menu();
        state.search_changed("durian");
        let value = state.commit_free_text().unwrap();
        assert_eq!(state.selection(), &SelectionValue::Single(value));
        assert!(!state.is_open());
    }

    #[test]
    fn test_free_text_rejected_for_catalog_matches_and_plain_variants() {
        let mut default = fruit_select(Variant::Default);
        default.search_changed("durian");
        assert_eq!(
            default.commit_free_text(),
            Err(SelectError::FreeTextNotAllowed(Variant::Default))
        );

        let mut tag = fruit_select(Variant::Tag);
        tag.search_changed("cherry");
        // The display matches an existing option, ignoring case
        assert_eq!(
            tag.commit_free_text(),
            Err(SelectError::FreeTextNotAllowed(Variant::Tag))
        );

        tag.search_changed("");
        assert_eq!(
            tag.commit_free_text(),
            Err(SelectError::FreeTextNotAllowed(Variant::Tag))
        );
    }

    #[test]
    fn test_on_change_reports_every_selection() {
        let seen: Arc<Mutex<Vec<SelectionValue>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut state = select()
            .variant(Variant::Multiple)
            .option("a", "A")
            .option("b", "B")
            .on_change(move |selection| sink.lock().unwrap().push(selection.clone()))
            .build();

        state.select("a").unwrap();
        state.select("b").unwrap();
        state.deselect(&OptionValue::from("a")).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[2],
            SelectionValue::Multiple(vec![OptionValue::from("b")])
        );
    }

    #[test]
    fn test_set_tree_keeps_surviving_highlight() {
        let mut state = fruit_select(Variant::Multiple);
        state.open_menu();
        state.next_active();
        assert_eq!(state.active(), Some(&OptionValue::from("blue")));

        state.set_tree(vec![
            MenuNode::option("blue", "Blueberry"),
            MenuNode::option("kiwi", "Kiwi"),
        ]);
        assert_eq!(state.active(), Some(&OptionValue::from("blue")));

        state.set_tree(vec![MenuNode::option("kiwi", "Kiwi")]);
        assert_eq!(state.active(), Some(&OptionValue::from("kiwi")));
    }
}
