//! Error types for catalog construction.
//!
//! A malformed vocabulary table is the only fatal condition in this crate:
//! it aborts engine startup instead of degrading per query.

use thiserror::Error;

use super::Category;

/// Errors that can occur while validating the static vocabulary tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share a name within one category.
    #[error("duplicate {category} name: `{name}`")]
    DuplicateName {
        category: Category,
        name: &'static str,
    },

    /// A table row has an empty name.
    #[error("empty name in the {category} table")]
    EmptyName { category: Category },

    /// A directive name does not start with the `@` marker.
    #[error("directive `{name}` is missing its leading `@` marker")]
    UnmarkedDirective { name: &'static str },

    /// A builtin function declares a parameter without a label.
    #[error("builtin function `{function}` has an empty parameter label")]
    EmptyParamLabel { function: &'static str },
}
