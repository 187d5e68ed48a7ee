//! Virtual processor library.
//!
//! Provides a minimal 16-bit virtual processor: a line-oriented instruction
//! parser and an execution engine over four saturating registers and a flat
//! byte-addressable memory with a reserved stack region.

pub mod processor;
pub mod utils;
