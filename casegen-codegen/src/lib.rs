//! Dart use case emitter for the casegen use case generator.
//!
//! Turns [`MethodDescriptor`](casegen_parser::MethodDescriptor)s into Dart
//! libraries: a use case class that delegates to one repository method and,
//! in professional mode, an `Equatable` params holder.
//!
//! - [`builder`] - Indented code building and renderable fragments
//! - [`ast`] - Dart declaration builders
//! - [`render_units`] - The emitter entry point

pub mod ast;
pub mod builder;
mod dart_file;
mod emitter;
mod import_path;
pub mod naming;

pub use dart_file::DartFile;
pub use emitter::{RenderedUnit, render_units};
pub use import_path::{ImportContext, package_import};
