//! The ordered-container capability contract
//!
//! [`List`] extends [`Collection`] with a total linear order over
//! positions `0..len()`: bounds-checked indexed access, positional
//! search, bidirectional traversal with in-place mutation, stable
//! comparator sorting and live sub-range views.
//!
//! Implementations provide the four positional primitives (`get`, `set`,
//! `insert`, `remove_at`); positional search, bulk insertion,
//! `replace_all`, `sort_by`, order-sensitive equality and hashing, the
//! bidirectional cursor and the view machinery come as default
//! algorithms written against those primitives.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use tracing::trace;
use xxhash_rust::xxh3::Xxh3;

use crate::collection::Collection;
use crate::cursor::ListCursor;
use crate::error::{Error, Result};
use crate::view::ListView;

/// Positionally ordered container
///
/// # Contract for implementors
///
/// Indices are contiguous and zero-based. Every structural mutation
/// renumbers the positions after the mutation point and advances the
/// container's generation; `set` replaces in place and must not.
/// Traversal order and positional order coincide: `nth(i)` and `get(i)`
/// observe the same element.
pub trait List<E: PartialEq>: Collection<E> {
    /// Element at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    fn get(&self, index: usize) -> Result<&E>;

    /// Replace the element at `index`; returns the prior element
    ///
    /// Not a structural mutation: cursors and views stay valid.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`, or
    /// `UnsupportedOperation` for an immutable list.
    fn set(&mut self, index: usize, element: E) -> Result<E>;

    /// Insert `element` at `index`, shifting subsequent elements right
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index > len()`, or
    /// `UnsupportedOperation` for an immutable list.
    fn insert(&mut self, index: usize, element: E) -> Result<()>;

    /// Remove and return the element at `index`, shifting subsequent
    /// elements left
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`, or
    /// `UnsupportedOperation` for an immutable list.
    fn remove_at(&mut self, index: usize) -> Result<E>;

    /// First position holding an element equal to `probe`
    fn index_of(&self, probe: &E) -> Option<usize> {
        (0..self.len()).find(|&pos| self.nth(pos) == Some(probe))
    }

    /// Last position holding an element equal to `probe`
    fn last_index_of(&self, probe: &E) -> Option<usize> {
        (0..self.len()).rev().find(|&pos| self.nth(pos) == Some(probe))
    }

    /// Insert every element of `other` starting at `index`, in `other`'s
    /// traversal order
    ///
    /// Returns whether this list changed. No rollback on failure.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index > len()`; propagates `insert`
    /// failures.
    fn insert_all(&mut self, index: usize, other: &dyn Collection<E>) -> Result<bool>
    where
        E: Clone,
    {
        if index > self.len() {
            return Err(Error::index_out_of_range(index, self.len()));
        }
        let mut at = index;
        let mut changed = false;
        for pos in 0..other.len() {
            if let Some(element) = other.nth(pos) {
                self.insert(at, element.clone())?;
                at += 1;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Replace every element with the result of `operator`, front to back
    ///
    /// Single pass through a bidirectional cursor, writing each result
    /// back through the cursor's in-place replacement.
    ///
    /// # Errors
    ///
    /// Propagates `set` failures; an immutable list fails on the first
    /// element.
    fn replace_all(&mut self, operator: &mut dyn FnMut(E) -> E) -> Result<()>
    where
        E: Clone,
    {
        let mut cursor = self.list_cursor();
        loop {
            let current = match cursor.next::<E, Self>(self)? {
                Some(element) => element.clone(),
                None => break,
            };
            cursor.replace::<E, Self>(self, operator(current))?;
        }
        Ok(())
    }

    /// Sort the list by `compare`, preserving the relative order of
    /// elements that compare equal
    ///
    /// Two passes: the elements are snapshotted with [`Collection::to_vec`],
    /// the snapshot is sorted with a stable algorithm, and the sorted
    /// values are written back through a cursor. The extra allocation buys
    /// identical complexity and stability on every backing structure;
    /// comparator sorting in place against linked storage could guarantee
    /// neither.
    ///
    /// # Errors
    ///
    /// Propagates write-back failures; an immutable list fails on the
    /// first element.
    fn sort_by(&mut self, compare: &mut dyn FnMut(&E, &E) -> Ordering) -> Result<()>
    where
        E: Clone,
    {
        let mut snapshot = self.to_vec();
        trace!(len = snapshot.len(), "sorting snapshot for write-back");
        snapshot.sort_by(|a, b| compare(a, b));
        let mut cursor = self.list_cursor();
        for element in snapshot {
            cursor.next::<E, Self>(self)?;
            cursor.replace::<E, Self>(self, element)?;
        }
        Ok(())
    }

    /// Bidirectional cursor positioned at the front
    fn list_cursor(&self) -> ListCursor {
        ListCursor::bound_to(self.id(), self.generation(), 0)
    }

    /// Bidirectional cursor positioned so a forward step yields the
    /// element at `start` (or end-of-sequence when `start == len()`)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `start > len()`.
    fn list_cursor_at(&self, start: usize) -> Result<ListCursor> {
        if start > self.len() {
            return Err(Error::index_out_of_range(start, self.len()));
        }
        Ok(ListCursor::bound_to(self.id(), self.generation(), start))
    }

    /// Live window over positions `[from, to)`
    ///
    /// The view copies nothing: its operations read and mutate this list
    /// with translated indices. Structural mutation of this list outside
    /// the view's own operations invalidates the view fail-fast.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `from > to` or `to > len()`.
    fn view(&self, from: usize, to: usize) -> Result<ListView> {
        if from > to {
            return Err(Error::index_out_of_range(from, to));
        }
        if to > self.len() {
            return Err(Error::index_out_of_range(to, self.len()));
        }
        Ok(ListView::bound_to(self.id(), self.generation(), from, to - from))
    }

    /// True iff `other` has the same size and element-wise equal content
    /// at every position
    fn eq_list(&self, other: &dyn List<E>) -> bool {
        self.len() == other.len() && (0..self.len()).all(|pos| self.nth(pos) == other.nth(pos))
    }

    /// Order-sensitive hash: `fold(1, |acc, e| acc * 31 + hash64(e))`
    /// over the elements front to back, with wrapping arithmetic
    ///
    /// `hash64` is xxh3 with a fixed seed, so equal lists hash equal and
    /// the value is reproducible across implementations and process runs.
    fn list_hash(&self) -> u64
    where
        E: Hash,
    {
        let mut acc: u64 = 1;
        for pos in 0..self.len() {
            let mut hasher = Xxh3::with_seed(0);
            if let Some(element) = self.nth(pos) {
                element.hash(&mut hasher);
            }
            acc = acc.wrapping_mul(31).wrapping_add(hasher.finish());
        }
        acc
    }
}
