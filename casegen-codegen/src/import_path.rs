//! Package import derivation for generated units.

use casegen_core::defaults;

use crate::ast::Import;

/// Everything the emitter needs to know about where the repository lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportContext {
    /// Dart package name, as declared in `pubspec.yaml`.
    pub project_name: String,
    /// Path of the repository declaration file.
    pub declaration_path: String,
    /// Location of the `Failure` type relative to `lib/`.
    pub failure_path: String,
}

impl ImportContext {
    pub fn new(project_name: impl Into<String>, declaration_path: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            declaration_path: declaration_path.into(),
            failure_path: defaults::FAILURE_PATH.to_string(),
        }
    }

    pub fn with_failure_path(mut self, path: impl Into<String>) -> Self {
        self.failure_path = path.into();
        self
    }

    /// Import of the repository declaration.
    pub fn declaration_import(&self) -> Import {
        Import::new(package_import(&self.project_name, &self.declaration_path))
    }

    /// Import of the `Failure` type.
    pub fn failure_import(&self) -> Import {
        Import::new(package_import(&self.project_name, &self.failure_path))
    }
}

/// Turn a file path into a `package:` URI.
///
/// Everything up to and including the first `lib/` segment is dropped.
/// Backslashes are treated as separators and the result always ends in `.dart`.
///
/// ```
/// use casegen_codegen::package_import;
///
/// assert_eq!(
///     package_import("shop", "/work/shop/lib/features/order/order_repository.dart"),
///     "package:shop/features/order/order_repository.dart",
/// );
/// ```
pub fn package_import(project_name: &str, path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let relative = match lib_segment_end(&normalized) {
        Some(end) => &normalized[end..],
        None => normalized.trim_start_matches("./").trim_start_matches('/'),
    };

    let mut uri = format!("package:{}/{}", project_name, relative);
    if !uri.ends_with(".dart") {
        uri.push_str(".dart");
    }
    uri
}

/// Byte offset just past the first `lib/` path segment.
fn lib_segment_end(path: &str) -> Option<usize> {
    if path.starts_with("lib/") {
        return Some(4);
    }
    path.find("/lib/").map(|i| i + 5)
}
