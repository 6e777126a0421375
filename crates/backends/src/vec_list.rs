//! Array-backed list
//!
//! [`VecList`] is the reference implementation of the container
//! contracts: a growable array holding its elements in insertion order.
//! It accepts every element (duplicates included), so `add` always
//! reports a change.

use stowage_contract::{Collection, ContainerId, Error, List, Result, Revision};

/// Growable array-backed list in insertion order
#[derive(Debug, Clone)]
pub struct VecList<E> {
    elements: Vec<E>,
    revision: Revision,
}

impl<E: PartialEq> VecList<E> {
    /// Empty list
    pub fn new() -> Self {
        VecList {
            elements: Vec::new(),
            revision: Revision::new(),
        }
    }

    /// Empty list with room for `capacity` elements before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        VecList {
            elements: Vec::with_capacity(capacity),
            revision: Revision::new(),
        }
    }

    /// Take ownership of `elements` as the list's content
    pub fn from_vec(elements: Vec<E>) -> Self {
        VecList {
            elements,
            revision: Revision::new(),
        }
    }

    /// Traversal-order copy of any conforming container
    ///
    /// The copy holds independent storage: mutating it never affects
    /// `source`, and vice versa.
    pub fn copy_of(source: &dyn Collection<E>) -> Self
    where
        E: Clone,
    {
        Self::from_vec(source.to_vec())
    }

    /// The elements as a slice, in positional order
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }
}

impl<E: PartialEq> Default for VecList<E> {
    fn default() -> Self {
        VecList::new()
    }
}

impl<E: PartialEq> From<Vec<E>> for VecList<E> {
    fn from(elements: Vec<E>) -> Self {
        VecList::from_vec(elements)
    }
}

impl<E: PartialEq> FromIterator<E> for VecList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        VecList::from_vec(iter.into_iter().collect())
    }
}

impl<E: PartialEq> PartialEq for VecList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: PartialEq> Collection<E> for VecList<E> {
    fn id(&self) -> ContainerId {
        self.revision.id()
    }

    fn generation(&self) -> u64 {
        self.revision.generation()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn contains(&self, probe: &E) -> bool {
        self.elements.contains(probe)
    }

    fn nth(&self, pos: usize) -> Option<&E> {
        self.elements.get(pos)
    }

    fn add(&mut self, element: E) -> Result<bool> {
        self.elements.push(element);
        self.revision.bump();
        Ok(true)
    }

    fn remove(&mut self, probe: &E) -> Result<bool> {
        match self.elements.iter().position(|element| element == probe) {
            Some(pos) => {
                self.elements.remove(pos);
                self.revision.bump();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_nth(&mut self, pos: usize) -> Result<E> {
        if pos >= self.elements.len() {
            return Err(Error::index_out_of_range(pos, self.elements.len()));
        }
        self.revision.bump();
        Ok(self.elements.remove(pos))
    }

    fn clear(&mut self) -> Result<()> {
        if !self.elements.is_empty() {
            self.elements.clear();
            self.revision.bump();
        }
        Ok(())
    }
}

impl<E: PartialEq> List<E> for VecList<E> {
    fn get(&self, index: usize) -> Result<&E> {
        self.elements
            .get(index)
            .ok_or(Error::index_out_of_range(index, self.elements.len()))
    }

    fn set(&mut self, index: usize, element: E) -> Result<E> {
        // In-place replacement is not structural; the revision stays put.
        match self.elements.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(Error::index_out_of_range(index, self.elements.len())),
        }
    }

    fn insert(&mut self, index: usize, element: E) -> Result<()> {
        if index > self.elements.len() {
            return Err(Error::index_out_of_range(index, self.elements.len()));
        }
        self.elements.insert(index, element);
        self.revision.bump();
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<E> {
        if index >= self.elements.len() {
            return Err(Error::index_out_of_range(index, self.elements.len()));
        }
        self.revision.bump();
        Ok(self.elements.remove(index))
    }
}
