//! Fail-fast traversal cursors
//!
//! A cursor is a detached handle: it stores the identity and structural
//! generation of the container it was created over, never a borrow of it.
//! Every operation takes the container by reference and first proves that
//! (a) it is the same container the cursor was bound to and (b) the
//! container has not been structurally mutated outside this cursor since
//! the last synchronization. A mismatch moves the cursor to the
//! `Invalidated` state and signals `ConcurrentStructuralChange`, now and
//! on every later use — the recorded positions could otherwise refer to
//! different elements after an out-of-band insert or remove.
//!
//! A cursor that held `&mut` to its container would make out-of-band
//! mutation impossible to even express; the contract requires the
//! violation to be *detected*, so detection happens at runtime against
//! the container's revision.
//!
//! [`Cursor`] walks any [`Collection`] forward and supports
//! cursor-relative removal. [`ListCursor`] walks a [`List`] in both
//! directions and additionally supports in-place replacement and
//! insertion relative to its position.

use tracing::warn;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::list::List;
use crate::revision::ContainerId;

/// Lifecycle of a traversal cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Created, nothing yielded yet
    Fresh,
    /// At least one element yielded
    Advancing,
    /// No further element in the requested direction
    Exhausted,
    /// Out-of-band structural mutation observed; permanently unusable
    Invalidated,
}

/// Forward traversal cursor over any [`Collection`]
///
/// Created by [`Collection::cursor`]. Yields elements in the container's
/// traversal order and supports removing the element it last yielded.
#[derive(Debug)]
pub struct Cursor {
    container: ContainerId,
    expected: u64,
    next: usize,
    last: Option<usize>,
    state: CursorState,
}

impl Cursor {
    pub(crate) fn bound_to(container: ContainerId, generation: u64) -> Self {
        Cursor {
            container,
            expected: generation,
            next: 0,
            last: None,
            state: CursorState::Fresh,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> CursorState {
        self.state
    }

    fn guard<E, C>(&mut self, container: &C) -> Result<()>
    where
        E: PartialEq,
        C: Collection<E> + ?Sized,
    {
        if self.state == CursorState::Invalidated {
            return Err(Error::concurrent("cursor was already invalidated"));
        }
        if container.id() != self.container {
            return Err(Error::concurrent("cursor is bound to a different container"));
        }
        if container.generation() != self.expected {
            self.state = CursorState::Invalidated;
            warn!(
                container = container.id().as_u64(),
                "container mutated outside its cursor; cursor invalidated"
            );
            return Err(Error::concurrent("container mutated outside this cursor"));
        }
        Ok(())
    }

    /// Yield the next element in traversal order, or `None` once exhausted
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` if the container was
    /// structurally mutated outside this cursor.
    pub fn advance<'c, E, C>(&mut self, container: &'c C) -> Result<Option<&'c E>>
    where
        E: PartialEq,
        C: Collection<E> + ?Sized,
    {
        self.guard(container)?;
        match container.nth(self.next) {
            Some(element) => {
                self.last = Some(self.next);
                self.next += 1;
                self.state = CursorState::Advancing;
                Ok(Some(element))
            }
            None => {
                self.state = CursorState::Exhausted;
                Ok(None)
            }
        }
    }

    /// Remove and return the element this cursor last yielded
    ///
    /// Re-synchronizes with the container afterwards, so the removal does
    /// not invalidate this cursor and no element is skipped or revisited.
    ///
    /// # Errors
    ///
    /// Returns `NoCurrentElement` if nothing was yielded yet or the
    /// current element was already removed, `ConcurrentStructuralChange`
    /// on out-of-band mutation, and propagates removal failures from the
    /// container.
    pub fn remove_current<E, C>(&mut self, container: &mut C) -> Result<E>
    where
        E: PartialEq,
        C: Collection<E> + ?Sized,
    {
        self.guard(container)?;
        let position = self
            .last
            .ok_or(Error::NoCurrentElement("advance the cursor before removing"))?;
        let removed = container.remove_nth(position)?;
        if position < self.next {
            self.next -= 1;
        }
        self.last = None;
        self.expected = container.generation();
        Ok(removed)
    }
}

/// Bidirectional traversal cursor over any [`List`]
///
/// Created by [`List::list_cursor`] or [`List::list_cursor_at`]. Sits
/// between positions: a forward step yields the element at the cursor's
/// next index, a backward step the element just before it. Replacement,
/// insertion and removal act relative to the element last yielded.
#[derive(Debug)]
pub struct ListCursor {
    container: ContainerId,
    expected: u64,
    next: usize,
    last: Option<usize>,
    state: CursorState,
}

impl ListCursor {
    pub(crate) fn bound_to(container: ContainerId, generation: u64, start: usize) -> Self {
        ListCursor {
            container,
            expected: generation,
            next: start,
            last: None,
            state: CursorState::Fresh,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Position a forward step would yield
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Position a backward step would yield, `None` at the start
    pub fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    fn guard<E, L>(&mut self, list: &L) -> Result<()>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        if self.state == CursorState::Invalidated {
            return Err(Error::concurrent("cursor was already invalidated"));
        }
        if list.id() != self.container {
            return Err(Error::concurrent("cursor is bound to a different container"));
        }
        if list.generation() != self.expected {
            self.state = CursorState::Invalidated;
            warn!(
                container = list.id().as_u64(),
                "list mutated outside its cursor; cursor invalidated"
            );
            return Err(Error::concurrent("container mutated outside this cursor"));
        }
        Ok(())
    }

    /// Yield the next element, or `None` at the end of the list
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` on out-of-band mutation.
    pub fn next<'l, E, L>(&mut self, list: &'l L) -> Result<Option<&'l E>>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        match list.nth(self.next) {
            Some(element) => {
                self.last = Some(self.next);
                self.next += 1;
                self.state = CursorState::Advancing;
                Ok(Some(element))
            }
            None => {
                self.state = CursorState::Exhausted;
                Ok(None)
            }
        }
    }

    /// Yield the previous element, or `None` at the start of the list
    ///
    /// Exhaustion is per direction: a cursor exhausted backward may still
    /// move forward, and vice versa.
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` on out-of-band mutation.
    pub fn previous<'l, E, L>(&mut self, list: &'l L) -> Result<Option<&'l E>>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        if self.next == 0 {
            self.state = CursorState::Exhausted;
            return Ok(None);
        }
        self.next -= 1;
        self.last = Some(self.next);
        self.state = CursorState::Advancing;
        Ok(list.nth(self.next))
    }

    /// Replace the element last yielded; returns the prior element
    ///
    /// Replacement is not structural: other cursors and views over the
    /// same list stay valid.
    ///
    /// # Errors
    ///
    /// Returns `NoCurrentElement` if nothing was yielded yet,
    /// `ConcurrentStructuralChange` on out-of-band mutation, and
    /// propagates `set` failures from the list.
    pub fn replace<E, L>(&mut self, list: &mut L, element: E) -> Result<E>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let position = self
            .last
            .ok_or(Error::NoCurrentElement("advance the cursor before replacing"))?;
        list.set(position, element)
    }

    /// Insert `element` just before the position a forward step would
    /// yield
    ///
    /// The cursor steps over the inserted element; the last-yielded
    /// element is forgotten.
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentStructuralChange` on out-of-band mutation and
    /// propagates `insert` failures from the list.
    pub fn insert_before_next<E, L>(&mut self, list: &mut L, element: E) -> Result<()>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        list.insert(self.next, element)?;
        self.next += 1;
        self.last = None;
        self.expected = list.generation();
        Ok(())
    }

    /// Remove and return the element last yielded
    ///
    /// # Errors
    ///
    /// Returns `NoCurrentElement` if nothing was yielded yet or the
    /// current element was already removed, `ConcurrentStructuralChange`
    /// on out-of-band mutation, and propagates removal failures from the
    /// list.
    pub fn remove_current<E, L>(&mut self, list: &mut L) -> Result<E>
    where
        E: PartialEq,
        L: List<E> + ?Sized,
    {
        self.guard(list)?;
        let position = self
            .last
            .ok_or(Error::NoCurrentElement("advance the cursor before removing"))?;
        let removed = list.remove_at(position)?;
        if position < self.next {
            self.next -= 1;
        }
        self.last = None;
        self.expected = list.generation();
        Ok(removed)
    }
}
