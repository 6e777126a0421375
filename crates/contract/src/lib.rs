//! Capability contracts for bulk and ordered containers
//!
//! This crate defines *contracts*, not storage: the invariants any
//! conforming container must uphold so client code can treat
//! heterogeneous implementations interchangeably.
//!
//! - [`Collection`]: unordered multiset capability — membership,
//!   cardinality, bulk set algebra, snapshot export, traversal cursor
//! - [`List`]: ordered capability extending [`Collection`] — indexed
//!   access, positional search, bidirectional traversal, stable sorting,
//!   live sub-range views, order-sensitive equality and hashing
//! - [`Cursor`] / [`ListCursor`]: fail-fast traversal handles
//! - [`ListView`]: non-owning live window over a parent list
//! - [`FrozenList`]: immutable list rejecting all mutation
//! - [`Error`]: the error conditions of the contract
//!
//! Implementations supply the primitive operations; the default
//! algorithms (`remove_if`, `replace_all`, `sort_by`, equality, hashing,
//! view relaying) are written once against the primitives and the cursor
//! and apply uniformly to any honest implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod cursor;
pub mod error;
pub mod frozen;
pub mod list;
pub mod revision;
pub mod view;

#[cfg(test)]
pub(crate) mod testkit;

// Re-export commonly used types and traits
pub use collection::Collection;
pub use cursor::{Cursor, CursorState, ListCursor};
pub use error::{Error, Result};
pub use frozen::FrozenList;
pub use list::List;
pub use revision::{ContainerId, Revision};
pub use view::ListView;
