//! List command report data structures.

use std::path::PathBuf;

use casegen_parser::{MethodDescriptor, Severity};
use serde::Serialize;

use super::output::{Output, Report};

/// Methods found in each declaration file.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub declarations: Vec<ListedDeclaration>,
}

#[derive(Debug, Serialize)]
pub struct ListedDeclaration {
    pub path: PathBuf,
    /// Repository class declared in the file, if any.
    pub repository: Option<String>,
    pub methods: Vec<MethodDescriptor>,
    /// Extraction diagnostics, already prefixed with their location.
    pub notes: Vec<(Severity, String)>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            let repository = declaration
                .repository
                .as_deref()
                .unwrap_or("no repository class");
            out.section(&format!("{} ({})", declaration.path.display(), repository));

            for method in &declaration.methods {
                let params = method
                    .parameters
                    .iter()
                    .map(|p| p.declaration())
                    .collect::<Vec<_>>()
                    .join(", ");
                out.key_value_indented(
                    &format!("{}({})", method.name, params),
                    &format!(
                        "{} [{}, line {}]",
                        method.declared_return_type(),
                        method.shape,
                        method.line
                    ),
                );
            }

            for (severity, note) in &declaration.notes {
                if severity.is_warning() {
                    out.warning(note);
                } else {
                    out.note(note);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use casegen_parser::extract;

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_methods() {
        let methods =
            extract("Future<Either<Failure, User>> getUser(String id, {bool cached = true});")
                .methods;
        let report = ListReport {
            declarations: vec![ListedDeclaration {
                path: PathBuf::from("user_repository.dart"),
                repository: Some("UserRepository".to_string()),
                methods,
                notes: vec![(Severity::Info, "getter skipped".to_string())],
            }],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "user_repository.dart (UserRepository):",
                "  getUser(String id, bool cached = true): Future<Either<Failure, User>> [either future, line 1]",
                "info: getter skipped",
            ]
        );
    }
}
