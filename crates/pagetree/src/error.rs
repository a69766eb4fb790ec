//! Error types for pagetree.

use thiserror::Error;

/// Result type used throughout pagetree.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by tree construction and layout.
#[derive(PartialEq, Error, Debug, Clone)]
pub enum Error {
    /// A page was found in an unusable state at layout time, for instance an
    /// unmeasured extent, or positions were read back before a layout pass
    /// completed. The whole pass for that root fails; partial coordinates
    /// are never produced.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// Contract misuse at the API edge, such as a `PageId` that does not
    /// belong to the tree it was used with.
    #[error("invalid: {0}")]
    Invalid(String),
}
