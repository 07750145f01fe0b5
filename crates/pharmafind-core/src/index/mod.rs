//! In-memory search index over medicine names.

mod cache;
mod tree;

pub use cache::*;
pub use tree::*;
