//! Live sub-range views over an ordered container
//!
//! A [`ListView`] is a window `[from, to)` over a parent [`List`]. It
//! copies nothing: every operation is delegated to the parent with the
//! window offset added, so mutation through the view is visible in the
//! parent immediately. Like a cursor, the view is a detached handle — a
//! back-reference, never an owner — holding the parent's identity and the
//! structural generation it last synchronized with. Structural mutation
//! of the parent outside the view's own operations desynchronizes the
//! window's notion of its end, so the view invalidates itself fail-fast
//! at its next use. The view's own structural operations re-capture the
//! parent generation and adjust the window length, keeping the view
//! valid through its own edits.

use tracing::warn;

use crate::error::{Error, Result};
use crate::list::List;
use crate::revision::ContainerId;

/// Non-owning live window over a contiguous index range of a parent list
///
/// Created by [`List::view`]. Operations take the parent list as an
/// argument; indices are relative to the window.
#[derive(Debug)]
pub struct ListView {
    container: ContainerId,
    expected: u64,
    start: usize,
    len: usize,
    invalidated: bool,
}

impl ListView {
    pub(crate) fn bound_to(container: ContainerId, generation: u64, start: usize, len: usize) -> Self {
        ListView {
            container,
            expected: generation,
            start,
            len,
            invalidated: false,
        }
    }

    /// Number of elements in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the window is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn guard<E, L>(&mut self, list: &L) -> Result<()>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        if self.invalidated {
            return Err(Error::concurrent("view was already invalidated"));
        }
        if list.id() != self.container {
            return Err(Error::concurrent("view is bound to a different list"));
        }
        if list.generation() != self.expected {
            self.invalidated = true;
            warn!(
                container = list.id().as_u64(),
                "list mutated outside its view; view invalidated"
            );
            return Err(Error::concurrent("list mutated outside this view"));
        }
        Ok(())
    }

    fn bounds(&self, index: usize, exclusive_end: bool) -> Result<usize> {
        let limit = if exclusive_end { self.len + 1 } else { self.len };
        if index >= limit {
            return Err(Error::index_out_of_range(index, self.len));
        }
        Ok(self.start + index)
    }

    /// Element at window position `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for `index >= len()` and
    /// `ConcurrentStructuralChange` if the parent was mutated out-of-band.
    pub fn get<'l, E, L>(&mut self, list: &'l L, index: usize) -> Result<&'l E>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let translated = self.bounds(index, false)?;
        list.get(translated)
    }

    /// Replace the element at window position `index`; returns the prior
    /// element
    ///
    /// Not structural: neither this view nor other handles over the
    /// parent are invalidated.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, `ConcurrentStructuralChange`, or the
    /// parent's `set` failure.
    pub fn set<E, L>(&mut self, list: &mut L, index: usize, element: E) -> Result<E>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let translated = self.bounds(index, false)?;
        list.set(translated, element)
    }

    /// Insert `element` at window position `index` (`index == len()`
    /// appends at the window end)
    ///
    /// The parent grows by one; positions after the window shift right.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, `ConcurrentStructuralChange`, or the
    /// parent's `insert` failure.
    pub fn insert<E, L>(&mut self, list: &mut L, index: usize, element: E) -> Result<()>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let translated = self.bounds(index, true)?;
        list.insert(translated, element)?;
        self.len += 1;
        self.expected = list.generation();
        Ok(())
    }

    /// Append `element` at the end of the window
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` or the parent's `insert`
    /// failure.
    pub fn push<E, L>(&mut self, list: &mut L, element: E) -> Result<()>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        let at = self.len;
        self.insert(list, at, element)
    }

    /// Remove and return the element at window position `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange`, `ConcurrentStructuralChange`, or the
    /// parent's removal failure.
    pub fn remove_at<E, L>(&mut self, list: &mut L, index: usize) -> Result<E>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let translated = self.bounds(index, false)?;
        let removed = list.remove_at(translated)?;
        self.len -= 1;
        self.expected = list.generation();
        Ok(removed)
    }

    /// Remove every element in the window from the parent
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` or the parent's removal
    /// failure.
    pub fn clear<E, L>(&mut self, list: &mut L) -> Result<()>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        for _ in 0..self.len {
            list.remove_at(self.start)?;
        }
        self.len = 0;
        self.expected = list.generation();
        Ok(())
    }

    /// True iff the window holds an element equal to `probe`
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` on out-of-band mutation.
    pub fn contains<E, L>(&mut self, list: &L, probe: &E) -> Result<bool>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        Ok(self.index_of(list, probe)?.is_some())
    }

    /// First window position holding an element equal to `probe`
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` on out-of-band mutation.
    pub fn index_of<E, L>(&mut self, list: &L, probe: &E) -> Result<Option<usize>>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        Ok((0..self.len).find(|&pos| list.nth(self.start + pos) == Some(probe)))
    }

    /// Snapshot of the window's elements in order
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` on out-of-band mutation.
    pub fn to_vec<E, L>(&mut self, list: &L) -> Result<Vec<E>>
    where
        E: PartialEq + Clone,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let mut snapshot = Vec::with_capacity(self.len);
        for pos in 0..self.len {
            if let Some(element) = list.nth(self.start + pos) {
                snapshot.push(element.clone());
            }
        }
        Ok(snapshot)
    }

    /// Window over positions `[from, to)` of this window, sharing the
    /// same parent
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `from > to` or `to > len()`, and
    /// `ConcurrentStructuralChange` on out-of-band mutation.
    pub fn subview<E, L>(&mut self, list: &L, from: usize, to: usize) -> Result<ListView>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        if from > to {
            return Err(Error::index_out_of_range(from, to));
        }
        if to > self.len {
            return Err(Error::index_out_of_range(to, self.len));
        }
        Ok(ListView::bound_to(self.container, self.expected, self.start + from, to - from))
    }
}
