//! Figbox Common Library
//!
//! Shared types, wire protocol, and display formatting used by the matcher client.

pub mod format;
pub mod protocol;
pub mod types;

pub use protocol::*;
pub use types::*;
