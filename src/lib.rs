//! stowage — capability contracts for bulk and ordered containers
//!
//! Two layered capability traits describe containers independently of any
//! backing structure: [`Collection`] for unordered bulk storage and
//! [`List`] for positional order. Client code holds a reference typed as
//! the capability it needs; any conforming structure can stand behind it.
//!
//! # Quick start
//!
//! ```
//! use stowage::{Collection, List, VecList};
//!
//! let mut list: VecList<i32> = vec![3, 1, 2].into();
//! list.sort_by(&mut |a, b| a.cmp(b))?;
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//!
//! list.remove_if(&mut |e| e % 2 == 0)?;
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! # Ok::<(), stowage::Error>(())
//! ```
//!
//! Traversal uses fail-fast cursors: structural mutation of a container
//! outside a cursor or view invalidates the handle, and its next use
//! signals [`Error::ConcurrentStructuralChange`] instead of silently
//! walking stale positions.

pub use stowage_backends::*;
pub use stowage_contract::*;
