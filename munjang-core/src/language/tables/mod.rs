//! Lookup tables built from a rules configuration

pub mod abbreviation;
pub mod terminator;

pub use abbreviation::Trie;
pub use terminator::{classify_dot, DotRole, TermTable};
