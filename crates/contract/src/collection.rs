//! The bulk-container capability contract
//!
//! [`Collection`] is the root abstraction: an unordered multiset of
//! elements with membership, cardinality, bulk set-algebra operations and
//! a traversal cursor. It gives no ordering or indexing *guarantee*, but
//! every container fixes a deterministic total traversal order, and the
//! two traversal primitives (`nth`, `remove_nth`) expose it so that the
//! default algorithms and the cursor machinery can be written once and
//! apply uniformly to any conforming structure.
//!
//! Implementations provide the primitives; the bulk algorithms
//! (`contains_all`, `add_all`, `remove_all`, `retain_all`, `remove_if`,
//! snapshot export) come for free. All of them process elements in
//! traversal order, deterministically.
//!
//! The trait is dyn-compatible: bulk operands are `&dyn Collection<E>`
//! references, so heterogeneous implementations interoperate.

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::revision::ContainerId;

/// Unordered bulk container of elements compared by value equality
///
/// # Contract for implementors
///
/// - `nth(pos)` enumerates the container's traversal order: `Some` for
///   every `pos < len()`, `None` past the end. The order must be total
///   and fixed between structural mutations.
/// - Every structural mutation (insert, remove, clear on a non-empty
///   container) must advance `generation()` by at least one. In-place
///   element replacement must not.
/// - `add` may reject an element: with `Ok(false)` where the documented
///   policy of the container permits it (capacity bounds, uniqueness),
///   or with [`Error::RejectedElement`](crate::Error::RejectedElement)
///   when the element violates a structural precondition.
///
/// Containers are single-owner: the contract assumes one logical sequence
/// of operations mutates a container at a time and provides no locking.
pub trait Collection<E: PartialEq> {
    /// Identity of this container instance, fixed at construction
    fn id(&self) -> ContainerId;

    /// Structural generation; advances on every structural mutation
    fn generation(&self) -> u64;

    /// Number of elements currently held
    fn len(&self) -> usize;

    /// True iff an element equal to `probe` is present
    fn contains(&self, probe: &E) -> bool;

    /// Element at `pos` in traversal order, `None` past the end
    fn nth(&self, pos: usize) -> Option<&E>;

    /// Insert `element`; returns whether the container changed
    ///
    /// # Errors
    ///
    /// Returns `RejectedElement` if the element violates a structural
    /// precondition of this container, or `UnsupportedOperation` for an
    /// immutable container.
    fn add(&mut self, element: E) -> Result<bool>;

    /// Remove at most one occurrence equal to `probe`; returns whether a
    /// removal occurred
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for an immutable container.
    fn remove(&mut self, probe: &E) -> Result<bool>;

    /// Remove and return the element at `pos` in traversal order
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `pos >= len()`, or
    /// `UnsupportedOperation` for an immutable container.
    fn remove_nth(&mut self, pos: usize) -> Result<E>;

    /// Remove all elements; afterwards `is_empty()` is true
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for an immutable container.
    fn clear(&mut self) -> Result<()>;

    /// True iff the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh fail-fast traversal cursor bound to this container
    ///
    /// The cursor is owned by the caller and validates on every operation
    /// that the container has not been structurally mutated out-of-band.
    fn cursor(&self) -> Cursor {
        Cursor::bound_to(self.id(), self.generation())
    }

    /// True iff every element of `other` has a corresponding match here,
    /// counted with multiplicity
    fn contains_all(&self, other: &dyn Collection<E>) -> bool {
        for pos in 0..other.len() {
            let probe = match other.nth(pos) {
                Some(element) => element,
                None => return false,
            };
            // Occurrences of `probe` within other[0..=pos]: requiring a
            // match for each keeps duplicates honest without needing Hash.
            let mut needed = 0usize;
            for earlier in 0..=pos {
                if other.nth(earlier) == Some(probe) {
                    needed += 1;
                }
            }
            let mut found = 0usize;
            for mine in 0..self.len() {
                if self.nth(mine) == Some(probe) {
                    found += 1;
                    if found >= needed {
                        break;
                    }
                }
            }
            if found < needed {
                return false;
            }
        }
        true
    }

    /// Add every element of `other`, in its traversal order
    ///
    /// Returns whether this container changed. No rollback: elements
    /// added before a failure stay added.
    ///
    /// # Errors
    ///
    /// Propagates the first `add` failure.
    fn add_all(&mut self, other: &dyn Collection<E>) -> Result<bool>
    where
        E: Clone,
    {
        let mut changed = false;
        for pos in 0..other.len() {
            if let Some(element) = other.nth(pos) {
                changed |= self.add(element.clone())?;
            }
        }
        Ok(changed)
    }

    /// Remove every occurrence of every element that appears in `other`
    ///
    /// # Errors
    ///
    /// Propagates removal failures from the underlying container.
    fn remove_all(&mut self, other: &dyn Collection<E>) -> Result<bool> {
        self.remove_if(&mut |element| other.contains(element))
    }

    /// Remove every element *not* present in `other`
    ///
    /// # Errors
    ///
    /// Propagates removal failures from the underlying container.
    fn retain_all(&mut self, other: &dyn Collection<E>) -> Result<bool> {
        self.remove_if(&mut |element| !other.contains(element))
    }

    /// Remove every element for which `predicate` holds
    ///
    /// Drives a traversal cursor to completion and requests
    /// cursor-relative removal for each matching element, so each element
    /// is visited exactly once regardless of removals along the way.
    /// Returns whether any removal occurred.
    ///
    /// # Errors
    ///
    /// Propagates removal failures from the underlying container.
    fn remove_if(&mut self, predicate: &mut dyn FnMut(&E) -> bool) -> Result<bool> {
        let mut cursor = self.cursor();
        let mut removed = 0usize;
        loop {
            let matched = match cursor.advance::<E, Self>(self)? {
                Some(element) => predicate(element),
                None => break,
            };
            if matched {
                cursor.remove_current::<E, Self>(self)?;
                removed += 1;
            }
        }
        if removed > 0 {
            trace!(removed, "predicate removal pass changed the container");
        }
        Ok(removed > 0)
    }

    /// Snapshot of the elements in traversal order
    ///
    /// The result never aliases internal storage; the caller may mutate
    /// it freely without affecting the container.
    fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        let mut snapshot = Vec::with_capacity(self.len());
        for pos in 0..self.len() {
            if let Some(element) = self.nth(pos) {
                snapshot.push(element.clone());
            }
        }
        snapshot
    }

    /// Snapshot the elements into a caller-provided buffer
    ///
    /// The buffer is cleared first; afterwards it holds the elements in
    /// traversal order, independent of the container's storage.
    fn copy_into(&self, buffer: &mut Vec<E>)
    where
        E: Clone,
    {
        buffer.clear();
        buffer.reserve(self.len());
        for pos in 0..self.len() {
            if let Some(element) = self.nth(pos) {
                buffer.push(element.clone());
            }
        }
    }
}
