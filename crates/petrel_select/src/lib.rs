//! Petrel Select
//!
//! Headless state for searchable select menus, built on `petrel_menu`:
//!
//! - **SelectState**: the event-driven owner of selection, search text,
//!   highlight, and open state
//! - **SelectBuilder**: fluent construction with options, groups, initial
//!   selection, callbacks, and a custom search predicate
//! - **Tag**: the removable chip model for multiple-selection variants
//!
//! There is no rendering here. A presentation layer feeds UI events into
//! the command methods and re-renders from the query methods.
//!
//! # Example
//!
//! ```rust
//! use petrel_menu::Variant;
//! use petrel_select::select;
//!
//! let mut country = select()
//!     .variant(Variant::Combobox)
//!     .option("us", "United States")
//!     .option("uk", "United Kingdom")
//!     .group("Nordics", |group| {
//!         group.option("se", "Sweden").option("no", "Norway")
//!     })
//!     .build();
//!
//! country.open_menu();
//! country.search_changed("sw");
//! let value = country.select_active().unwrap();
//! assert_eq!(value.to_string(), "se");
//! assert!(country.is_selected(&value));
//! assert!(!country.is_open());
//! ```

pub mod builder;
pub mod error;
pub mod state;
pub mod tag;

pub use builder::{select, GroupBuilder, SelectBuilder};
pub use error::{Result, SelectError};
pub use state::{ChangeCallback, SelectState};
pub use tag::{DeselectCallback, Tag};
