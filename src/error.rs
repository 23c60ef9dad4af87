//! Typed errors surfaced by the repository
//! Anything the store raises beyond these passes through untranslated

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested id has no row in the store.
    #[error("song not found")]
    NotFound,

    /// The store accepted a write but did not return the expected
    /// confirmation. Signals an inconsistent write path; should not
    /// occur in practice.
    #[error("invariant violation: {0}")]
    Invariant(&'static str),

    /// Store-level failure (connectivity, constraint violation, bad SQL).
    #[error(transparent)]
    Store(#[from] sqlx::Error),

    /// Filesystem failure while preparing the database location.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the missing-id case, which consumers map to a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
