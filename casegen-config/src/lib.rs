//! `casegen.toml` parsing and validation for the casegen use case generator.
//!
//! ```toml
//! [generator]
//! mode = "professional"
//! fallback_project_name = "my_app"
//! failure_import = "core/error/failures.dart"
//! output = "lib/features/user/domain/usecases"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod validate;

pub use config::{Config, GeneratorConfig};
pub use error::{Error, Result, SourceContext};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "casegen.toml";
