//! Core definitions relied upon by all lazyview-* crates: the error type,
//! the crate-wide `Result` alias and argument validation helpers.

pub mod error;
pub mod result;
pub mod verify;

pub use result::Result;
