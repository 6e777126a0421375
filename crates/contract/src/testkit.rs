//! Minimal in-crate list implementation for behavioral tests

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::list::List;
use crate::revision::{ContainerId, Revision};

/// A plain Vec-backed list used to exercise the contract from inside the
/// crate. Accepts every element; duplicates permitted.
pub(crate) struct SampleList<E> {
    elements: Vec<E>,
    revision: Revision,
}

impl<E: PartialEq> SampleList<E> {
    pub(crate) fn from_vec(elements: Vec<E>) -> Self {
        SampleList {
            elements,
            revision: Revision::new(),
        }
    }
}

impl<E: PartialEq> Collection<E> for SampleList<E> {
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
        self.elements.iter().any(|element| element == probe)
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

impl<E: PartialEq> List<E> for SampleList<E> {
    fn get(&self, index: usize) -> Result<&E> {
        self.elements
            .get(index)
            .ok_or(Error::index_out_of_range(index, self.elements.len()))
    }

    fn set(&mut self, index: usize, element: E) -> Result<E> {
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
