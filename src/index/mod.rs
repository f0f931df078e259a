//! Index structures for fast lookup, derived from the catalog sequence.

pub mod id_index;

pub use id_index::IdIndex;
