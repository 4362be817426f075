//! Repository declaration extractor for the casegen use case generator.
//!
//! Scans Dart repository interfaces line by line and recognizes three method
//! shapes: `Future<Either<Failure, T>>`, `Future<T>` and `Stream<T>`. This is a
//! pattern matcher, not a Dart parser: each declaration has to fit on one
//! physical line, and generic payloads may nest one level deep.
//!
//! ```
//! use casegen_parser::{Shape, extract_descriptors};
//!
//! let methods = extract_descriptors(
//!     "abstract class UserRepository {\n  Future<Either<Failure, User>> getUser(String id);\n}",
//! );
//! assert_eq!(methods[0].name, "getUser");
//! assert_eq!(methods[0].shape, Shape::ErrorUnionFuture);
//! ```

mod comments;
mod diagnostic;
mod extract;
mod model;
mod params;
mod patterns;
mod split;

pub use comments::strip_comments;
pub use diagnostic::{Diagnostic, Severity};
pub use extract::{Extraction, extract, extract_descriptors};
pub use model::{MethodDescriptor, Parameter, ParameterKind, Shape};
pub use split::split_top_level;

/// Find the repository type declared in the source (`class <Name>Repository`).
///
/// Comments are ignored, so a commented-out class is never picked up.
pub fn find_repository_name(source: &str) -> Option<String> {
    let stripped = strip_comments(source);
    patterns::find_repository_name(&stripped).map(str::to_string)
}
