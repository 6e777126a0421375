//! Immutable lists
//!
//! [`FrozenList`] satisfies the read-only subset of the [`List`]
//! contract and deterministically rejects every mutating operation with
//! `UnsupportedOperation` — never a silent no-op and never `Ok(false)`,
//! so callers cannot mistake "nothing changed" for "rejected by design".
//!
//! Element storage is a shared `Arc<[E]>`: clones are cheap and the
//! canonical empty list costs nothing to share, which is safe precisely
//! because a frozen list has no mutable state. Cursors and views over a
//! frozen list can never be invalidated; its generation never moves.

use std::sync::Arc;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::list::List;
use crate::revision::ContainerId;

/// Immutable positionally ordered container
///
/// Construct with [`FrozenList::of`], [`FrozenList::copy_of`] or
/// [`FrozenList::empty`]. All reads, traversal and hashing behave like
/// any other list; all mutation signals `UnsupportedOperation`.
#[derive(Debug)]
pub struct FrozenList<E> {
    elements: Arc<[E]>,
    id: ContainerId,
}

impl<E: PartialEq> FrozenList<E> {
    /// Freeze the given elements, in iteration order
    pub fn of(elements: impl IntoIterator<Item = E>) -> Self {
        let elements: Vec<E> = elements.into_iter().collect();
        FrozenList {
            elements: elements.into(),
            id: ContainerId::allocate(),
        }
    }

    /// The canonical empty list
    pub fn empty() -> Self {
        FrozenList {
            elements: Vec::new().into(),
            id: ContainerId::allocate(),
        }
    }

    /// Freeze a traversal-order copy of `source`
    ///
    /// The copy is independent: it never aliases `source`'s storage.
    pub fn copy_of(source: &dyn Collection<E>) -> Self
    where
        E: Clone,
    {
        Self::of(source.to_vec())
    }

    /// The frozen elements as a slice
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }
}

/// Clones share element storage and identity; the clone *is* the same
/// immutable list.
impl<E> Clone for FrozenList<E> {
    fn clone(&self) -> Self {
        FrozenList {
            elements: Arc::clone(&self.elements),
            id: self.id,
        }
    }
}

impl<E: PartialEq> PartialEq for FrozenList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: PartialEq> Collection<E> for FrozenList<E> {
    fn id(&self) -> ContainerId {
        self.id
    }

    fn generation(&self) -> u64 {
        0
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn contains(&self, probe: &E) -> bool {
        self.elements.iter().any(|element| element == probe)
    }

    fn nth(&self, pos: usize) -> Option<&E> {
        self.elements.get(pos)
    }

    fn add(&mut self, _element: E) -> Result<bool> {
        Err(Error::unsupported("add on an immutable list"))
    }

    fn remove(&mut self, _probe: &E) -> Result<bool> {
        Err(Error::unsupported("remove on an immutable list"))
    }

    fn remove_nth(&mut self, _pos: usize) -> Result<E> {
        Err(Error::unsupported("remove on an immutable list"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::unsupported("clear on an immutable list"))
    }

    // The bulk defaults would be no-ops for empty operands; an immutable
    // list rejects the attempt itself, unconditionally.

    fn add_all(&mut self, _other: &dyn Collection<E>) -> Result<bool>
    where
        E: Clone,
    {
        Err(Error::unsupported("add_all on an immutable list"))
    }

    fn remove_all(&mut self, _other: &dyn Collection<E>) -> Result<bool> {
        Err(Error::unsupported("remove_all on an immutable list"))
    }

    fn retain_all(&mut self, _other: &dyn Collection<E>) -> Result<bool> {
        Err(Error::unsupported("retain_all on an immutable list"))
    }

    fn remove_if(&mut self, _predicate: &mut dyn FnMut(&E) -> bool) -> Result<bool> {
        Err(Error::unsupported("remove_if on an immutable list"))
    }
}

impl<E: PartialEq> List<E> for FrozenList<E> {
    fn get(&self, index: usize) -> Result<&E> {
        self.elements
            .get(index)
            .ok_or(Error::index_out_of_range(index, self.elements.len()))
    }

    fn set(&mut self, _index: usize, _element: E) -> Result<E> {
        Err(Error::unsupported("set on an immutable list"))
    }

    fn insert(&mut self, _index: usize, _element: E) -> Result<()> {
        Err(Error::unsupported("insert on an immutable list"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<E> {
        Err(Error::unsupported("remove on an immutable list"))
    }

    fn insert_all(&mut self, _index: usize, _other: &dyn Collection<E>) -> Result<bool>
    where
        E: Clone,
    {
        Err(Error::unsupported("insert_all on an immutable list"))
    }

    fn replace_all(&mut self, _operator: &mut dyn FnMut(E) -> E) -> Result<()>
    where
        E: Clone,
    {
        Err(Error::unsupported("replace_all on an immutable list"))
    }

    fn sort_by(&mut self, _compare: &mut dyn FnMut(&E, &E) -> std::cmp::Ordering) -> Result<()>
    where
        E: Clone,
    {
        Err(Error::unsupported("sort on an immutable list"))
    }
}
