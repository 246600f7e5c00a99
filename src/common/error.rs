//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the simulator.
///
/// There is a single error kind: the caller handed us input we cannot simulate.
/// It is always raised before any frame state is built, so a caller gets either a
/// complete result or this error, never a partial trace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),
}

/// Why an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("reference string is empty")]
    EmptyReferenceString,

    #[error("frame capacity must be positive, got {0}")]
    NonPositiveCapacity(i64),

    #[error("unknown policy {0:?} (expected FIFO, LRU or Optimal)")]
    UnknownPolicy(String),

    /// Adapter-level bound on reference string length.
    #[error("reference string has {len} pages, limit is {limit}")]
    TooManyReferences { len: usize, limit: usize },

    /// Bound on the width of a recorded frame trace.
    #[error("frame capacity {count} is too large to trace, limit is {limit}")]
    TooManyFrames { count: usize, limit: usize },

    #[error("unparsable page token {0:?}")]
    BadPageToken(String),
}

impl From<InvalidInput> for Error {
    fn from(reason: InvalidInput) -> Self {
        Error::InvalidInput(reason)
    }
}

impl Error {
    /// The reason this input was rejected.
    pub fn reason(&self) -> &InvalidInput {
        match self {
            Error::InvalidInput(reason) => reason,
        }
    }
}
