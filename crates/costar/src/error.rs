//! Error types for costar operations.
//!
//! Only the load phase can fail: a failed load yields no graph value at all,
//! so there is no partially-populated state to guard against afterwards.
//! Misses during the query phase (an unknown identifier, two people with no
//! connection) are ordinary results, not errors: `contains` returns `false`
//! and `shortest_path` returns an empty path.

use thiserror::Error;

/// Result type for costar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a record stream into a graph.
#[derive(Debug, Error)]
pub enum Error {
    /// The record source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record is too short to carry its kind tag.
    #[error("malformed record at line {line}: too short to carry a kind tag")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// An event record appeared before any person record, so the edge it
    /// describes has no person endpoint.
    #[error("event record at line {line} appears before any person record")]
    OrphanEvent {
        /// 1-based line number of the offending record.
        line: usize,
    },
}
