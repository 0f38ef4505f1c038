//! Decoding pipeline: scan to tokens, validate the grammar, build the tree.

pub mod builder;
pub mod scanner;
pub mod stream;
pub mod validation;
