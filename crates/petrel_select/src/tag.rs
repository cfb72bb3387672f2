//! Removable tag chip model
//!
//! A tag represents one committed value of a multiple-selection menu as a
//! removable chip. The model carries the value, the text to render, and an
//! optional deselect callback so a presentation layer can wire the chip's
//! remove affordance without reaching back into the select state.

use std::fmt;
use std::sync::Arc;

use petrel_menu::OptionValue;

/// Callback invoked with the tag's value when the chip is removed
pub type DeselectCallback = Arc<dyn Fn(&OptionValue) + Send + Sync>;

/// A removable chip for one selected value
#[derive(Clone)]
pub struct Tag {
    value: OptionValue,
    display: String,
    on_deselect: Option<DeselectCallback>,
}

impl Tag {
    /// Create a tag for a value and its display text
    pub fn new(value: impl Into<OptionValue>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
            on_deselect: None,
        }
    }

    /// The value this tag stands for
    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// The text rendered inside the chip
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Set the deselect callback
    pub fn on_deselect<F>(mut self, callback: F) -> Self
    where
        F: Fn(&OptionValue) + Send + Sync + 'static,
    {
        self.on_deselect = Some(Arc::new(callback));
        self
    }

    /// Trigger the deselect callback with this tag's value
    pub fn deselect(&self) {
        if let Some(callback) = &self.on_deselect {
            callback(&self.value);
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("value", &self.value)
            .field("display", &self.display)
            .field("on_deselect", &self.on_deselect.is_some())
            .finish()
    }
}
