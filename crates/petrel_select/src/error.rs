//! Error types for petrel_select

use petrel_menu::Variant;
use thiserror::Error;

/// Errors raised when a select command cannot be applied
///
/// Only the imperative command surface can fail; the underlying menu
/// queries are total and report absence through `Option` and `bool`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The requested value matches no enabled option in the tree
    #[error("no enabled option matches value `{0}`")]
    UnknownOption(String),

    /// The requested value is not part of the current selection
    #[error("value `{0}` is not selected")]
    NotSelected(String),

    /// The variant or the current search text does not permit free text
    #[error("free text entry is not allowed for the {0:?} variant in this state")]
    FreeTextNotAllowed(Variant),

    /// No option is highlighted
    #[error("no option is active")]
    NoActiveOption,
}

/// Result type for petrel_select operations
pub type Result<T> = std::result::Result<T, SelectError>;
