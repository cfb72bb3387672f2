//! Petrel Menu Core
//!
//! The headless core of Petrel's searchable select menus:
//!
//! - **Option Tree**: plain-data options and labeled groups, built by the
//!   caller per render and optionally loaded from serialized data
//! - **Matching**: case-insensitive search predicates with a pluggable
//!   custom filter
//! - **Navigator**: flattening, filtering, value/display lookup, clamped
//!   keyboard traversal, and active-option resolution
//!
//! Everything here is a pure function over borrowed input. There is no
//! internal state machine; the caller owns the selection, search text, and
//! highlight, and re-queries on each interaction. No operation fails:
//! absence is `None` or `false`, never an error.
//!
//! # Example
//!
//! ```rust
//! use petrel_menu::{navigator, MenuConfig, MenuNode, MenuState, OptionValue, Variant};
//!
//! let tree = vec![
//!     MenuNode::option("apple", "Apple"),
//!     MenuNode::group("Citrus", vec![
//!         MenuNode::option("lime", "Lime"),
//!         MenuNode::option("lemon", "Lemon"),
//!     ]),
//! ];
//!
//! // The user typed "lem": the filtered tree keeps the Citrus group with
//! // the one matching option, and the highlight resets to the top.
//! let config = MenuConfig {
//!     variant: Variant::Default,
//!     search_value: "lem".to_string(),
//!     ..MenuConfig::default()
//! };
//! let state = MenuState::default();
//!
//! let visible = navigator::filter(&tree, &config.search_value, None);
//! let active = navigator::resolve_active_option(&config, &visible, &state);
//! assert_eq!(active, Some(OptionValue::from("lemon")));
//! ```

pub mod matching;
pub mod navigator;
pub mod node;
pub mod state;

pub use matching::{contains, is_equal, OptionFilter};
pub use navigator::{
    filter, find_by_display, find_by_value, find_next, find_previous, flatten,
    resolve_active_option, should_allow_free_text,
};
pub use node::{MenuNode, MenuOption, OptionGroup, OptionValue};
pub use state::{MenuConfig, MenuState, SelectionValue, Variant};
