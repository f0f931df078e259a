//! Dataset decoding.

pub mod reader;

pub use reader::{DatasetReader, DecodeReport};
