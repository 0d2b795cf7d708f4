// crates/citydb-core/src/error.rs

//! Error kinds for query execution and row interpretation.
//!
//! Three failure families, kept deliberately distinct:
//! - [`Error::NotFound`] — a single-entity lookup matched zero rows.
//! - [`Error::Query`] — the backing store faulted while executing or
//!   reading a query; the underlying cause is attached unmodified.
//! - [`Error::MissingColumn`] / [`Error::TypeMismatch`] — a result row did
//!   not have the shape the mapper expected.
//!
//! List-returning lookups never produce `NotFound`; they return an empty
//! vector instead.

use rusqlite::types::Type;
use thiserror::Error;

/// Result type used throughout citydb-core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{entity} not found: {key}")]
    NotFound {
        entity: &'static str,
        key: String,
    },

    /// The backing store failed while executing or interpreting a query.
    /// Not retried locally; propagates to the caller with the cause.
    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("result row is missing column `{name}`")]
    MissingColumn { name: String },

    #[error("column `{column}` holds a {found} value of the wrong type")]
    TypeMismatch { column: String, found: Type },
}

impl Error {
    pub(crate) fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            key: key.into(),
        }
    }
}

/// Classifies a `rusqlite` error into one of our kinds.
///
/// Row-shape problems (unknown column, unconvertible value) get their own
/// variants; everything else is a faulted query. `QueryReturnedNoRows` is
/// *not* special-cased here — only single-row call sites translate it into
/// [`Error::NotFound`], and they do so before converting.
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnName(name) => Error::MissingColumn { name },
            rusqlite::Error::InvalidColumnType(_, column, found) => {
                Error::TypeMismatch { column, found }
            }
            rusqlite::Error::FromSqlConversionFailure(idx, found, _) => Error::TypeMismatch {
                column: format!("#{idx}"),
                found,
            },
            other => Error::Query(other),
        }
    }
}
