//! Plugin implementations
//!
//! Each plugin implements the core traits for one kind of input.

pub mod concept;

pub use concept::*;
