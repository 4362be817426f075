//! Core operations.
//!
//! This module contains the business logic for casegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;

use std::path::Path;

use casegen_parser::Diagnostic;

pub use generate::generate;
pub use list::list;

/// One-line description of a diagnostic, prefixed with where it came from.
fn describe(path: &Path, diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!(
            "{} ({}): {}",
            path.display(),
            location,
            diagnostic.message
        ),
        None => format!("{}: {}", path.display(), diagnostic.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let path = Path::new("lib/user_repository.dart");
        let located = Diagnostic::warning("extract", "unrecognized").at_line(4);
        assert_eq!(
            describe(path, &located),
            "lib/user_repository.dart (line 4): unrecognized"
        );

        let unlocated = Diagnostic::warning("extract", "no repository methods found");
        assert_eq!(
            describe(path, &unlocated),
            "lib/user_repository.dart: no repository methods found"
        );
    }
}
