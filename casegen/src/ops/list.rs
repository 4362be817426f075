//! List operation - show what the extractor finds.

use std::path::PathBuf;

use casegen_parser::{extract, find_repository_name};
use eyre::{Result, WrapErr};

use crate::reports::{ListReport, ListedDeclaration};

/// Execute the list operation over every declaration file.
pub fn list(declarations: &[PathBuf]) -> Result<ListReport> {
    let mut listed = Vec::new();
    for path in declarations {
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        let extraction = extract(&source);

        listed.push(ListedDeclaration {
            path: path.clone(),
            repository: find_repository_name(&source),
            notes: extraction
                .diagnostics
                .iter()
                .map(|d| (d.severity, super::describe(path, d)))
                .collect(),
            methods: extraction.methods,
        });
    }
    Ok(ListReport {
        declarations: listed,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use casegen_parser::{Severity, Shape};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lists_methods_and_diagnostics() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth_repository.dart");
        fs::write(
            &path,
            "abstract class AuthRepository {\n  Future<Either<Failure, Session>> signIn(String email, String password);\n  Future<User> get currentUser;\n}\n",
        )
        .unwrap();

        let report = list(std::slice::from_ref(&path)).unwrap();
        let listed = &report.declarations[0];
        assert_eq!(listed.repository.as_deref(), Some("AuthRepository"));
        assert_eq!(listed.methods.len(), 1);
        assert_eq!(listed.methods[0].shape, Shape::ErrorUnionFuture);
        assert_eq!(listed.notes.len(), 1);
        assert_eq!(listed.notes[0].0, Severity::Info);
        assert!(listed.notes[0].1.contains("currentUser"));
    }

    #[test]
    fn test_json_output_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clock_repository.dart");
        fs::write(
            &path,
            "abstract class ClockRepository {\n  Stream<DateTime> ticks();\n}\n",
        )
        .unwrap();

        let report = list(&[path]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let declaration = &json["declarations"][0];
        assert_eq!(declaration["repository"], "ClockRepository");
        assert_eq!(declaration["methods"][0]["name"], "ticks");
        assert_eq!(declaration["methods"][0]["shape"], "stream");
        assert_eq!(declaration["methods"][0]["line"], 2);
    }
}
