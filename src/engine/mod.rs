//! High-level operations — search engine and request validation.

pub mod query;
pub mod validate;

pub use query::{SearchCriteria, SearchEngine, SearchParams};
pub use validate::is_valid_request;
