//! Command-line surface: command implementations and JSON response bodies.

pub mod commands;
pub mod responses;
