//! Reference backing structures for the stowage container contracts
//!
//! The contract crate defines *what* a conforming container guarantees;
//! this crate provides a concrete structure that keeps those guarantees.
//! Any structure supplying the primitive operations and an honest
//! revision gets the default algorithms for free — [`VecList`] is the
//! array-backed proof of that.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod vec_list;

pub use vec_list::VecList;
