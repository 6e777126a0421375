//! A second, deque-backed list implementation
//!
//! The contract promises that its default algorithms behave identically
//! on any backing structure that supplies honest primitives. ChainList
//! exists to hold the contract to that promise: same trait surface as
//! `VecList`, different storage.

use std::collections::VecDeque;

use stowage::{Collection, ContainerId, Error, List, Result, Revision};

pub struct ChainList<E> {
    elements: VecDeque<E>,
    revision: Revision,
}

impl<E: PartialEq> ChainList<E> {
    pub fn new() -> Self {
        ChainList {
            elements: VecDeque::new(),
            revision: Revision::new(),
        }
    }

    pub fn from_vec(elements: Vec<E>) -> Self {
        ChainList {
            elements: elements.into(),
            revision: Revision::new(),
        }
    }
}

impl<E: PartialEq> Collection<E> for ChainList<E> {
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
        self.elements.push_back(element);
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
        Ok(self.elements.remove(pos).expect("position checked above"))
    }

    fn clear(&mut self) -> Result<()> {
        if !self.elements.is_empty() {
            self.elements.clear();
            self.revision.bump();
        }
        Ok(())
    }
}

impl<E: PartialEq> List<E> for ChainList<E> {
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
        Ok(self.elements.remove(index).expect("index checked above"))
    }
}
