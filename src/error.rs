//! Errors reported by Trie queries.
use thiserror::Error;

/// Trie errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TrieError {
    /// A query was given an argument it cannot work with, e.g. an empty
    /// prefix.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type for fallible Trie queries.
pub type Result<T> = std::result::Result<T, TrieError>;
