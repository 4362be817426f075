//! Core utilities and types for the casegen use case generator.
//!
//! This crate provides the naming projections and file writing rules
//! shared by the rest of the workspace.

pub mod defaults;
mod file;
mod mode;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Generation mode
pub use mode::Mode;
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_snake_case};
