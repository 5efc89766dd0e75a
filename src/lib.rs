#![cfg_attr(all(feature = "no-std", not(test)), no_std)]

#[cfg(feature = "no-std")]
extern crate alloc;

pub mod collections;

pub use collections::forward_list::{
    Cursor, CursorMut, ForwardList, ForwardListError, ForwardListResult, IntoIter, Iter, IterMut,
};
