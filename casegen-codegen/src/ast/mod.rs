//! Dart AST builders.

mod class;
mod imports;
mod members;

pub use class::Class;
pub use imports::Import;
pub use members::{Constructor, Field, Method};
