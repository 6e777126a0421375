//! Error conditions for the container contracts
//!
//! This module defines every condition a conforming container may signal.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All conditions are signaled synchronously at the point of the offending
//! call. None are retried internally and none are recoverable by the
//! container itself; callers handle or propagate them. Bulk operations give
//! no partial-mutation rollback guarantee: `add_all` may have added some
//! elements before failing on a later rejected element.

use thiserror::Error;

/// Result type alias for container operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error conditions signaled by container operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Index or range argument outside the valid bounds for the container.
    /// Always reported to the caller, never silently clamped.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Container length at the time of the call
        len: usize,
    },

    /// An element failed a structural precondition of the specific
    /// container. Reported unless the operation's documented contract
    /// explicitly permits a `false` return instead.
    #[error("element rejected: {0}")]
    RejectedElement(String),

    /// A cursor or view observed a structural mutation of its container
    /// that was not issued through the cursor or view itself. Reported
    /// fail-fast at the next use of the handle; the handle's position
    /// bookkeeping can no longer be trusted, so no recovery is attempted.
    #[error("concurrent structural change: {0}")]
    ConcurrentStructuralChange(&'static str),

    /// A mutating call against an immutable container. Always reported,
    /// never a silent no-op, so callers cannot mistake "nothing changed"
    /// for "rejected by design".
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A cursor-relative mutation (`replace`, `remove_current`, ...) was
    /// requested while the cursor has no current element: either nothing
    /// has been yielded yet, or the current element was already removed.
    #[error("cursor has no current element: {0}")]
    NoCurrentElement(&'static str),
}

impl Error {
    /// Construct an `IndexOutOfRange` error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Construct a `RejectedElement` error
    pub fn rejected(reason: impl Into<String>) -> Self {
        Error::RejectedElement(reason.into())
    }

    /// Construct a `ConcurrentStructuralChange` error
    pub fn concurrent(detail: &'static str) -> Self {
        Error::ConcurrentStructuralChange(detail)
    }

    /// Construct an `UnsupportedOperation` error
    pub fn unsupported(operation: &'static str) -> Self {
        Error::UnsupportedOperation(operation)
    }

    /// True if this is an `IndexOutOfRange` error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }

    /// True if this is a `RejectedElement` error
    pub fn is_rejected_element(&self) -> bool {
        matches!(self, Error::RejectedElement(_))
    }

    /// True if this is a `ConcurrentStructuralChange` error
    pub fn is_concurrent_structural_change(&self) -> bool {
        matches!(self, Error::ConcurrentStructuralChange(_))
    }

    /// True if this is an `UnsupportedOperation` error
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, Error::UnsupportedOperation(_))
    }

    /// True if this is a `NoCurrentElement` error
    pub fn is_no_current_element(&self) -> bool {
        matches!(self, Error::NoCurrentElement(_))
    }
}
