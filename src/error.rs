//! SimpleHash256 error types
//!
//! Hashing itself is total over byte sequences and never fails; the only
//! fallible surface is the file-hashing collaborator in [`crate::io`].

use thiserror::Error;

/// Errors surfaced by the library's collaborators.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading input to hash
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
