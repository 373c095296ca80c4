//! Source documents: vector-drawable XML loaded into an owned element tree

mod reader;
pub mod tree;

pub use reader::parse;
pub use tree::*;
