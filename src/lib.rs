//! A contiguous growable vector with explicit growth and relocation guarantees.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod capacity;

pub(crate) mod error;

pub mod storage;

pub mod vec;

pub use self::{
    error::{InsertionError, OutOfRange, StorageError},
    storage::{Global, RawAlloc},
    vec::Vec,
};
