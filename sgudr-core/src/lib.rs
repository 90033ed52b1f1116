//! sgudr Core Library
//!
//! This crate provides the error taxonomy and the small value types shared
//! by the sgudr codec and CLI crates.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
