//! Error types for catalog loading and pattern selection.

use thiserror::Error;

/// Errors raised while building the pattern catalog from its JSON document.
///
/// Any of these aborts initialization; there is no partial catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document itself is not the expected group → name → list shape.
    #[error("malformed pattern document: {0}")]
    Json(#[from] serde_json::Error),

    /// A coordinate token failed to parse as `"<int>,<int>"`.
    #[error("pattern {group}/{name}: bad coordinate token {token:?}")]
    BadCoordinate {
        group: String,
        name: String,
        token: String,
    },
}

/// Lookup of a pattern key the catalog does not contain.
///
/// Unreachable with a selector built from the catalog listing; if it fires
/// anyway it is a programmer error and callers should treat it as fatal.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("unknown pattern key {0:?}")]
    PatternNotFound(String),
}
