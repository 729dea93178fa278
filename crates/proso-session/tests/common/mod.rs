#![allow(dead_code)]

pub(crate) mod test_store;

pub use test_store::*;
