//! Generate operation - use cases from repository declarations.

use std::path::{Path, PathBuf};

use casegen_codegen::{ImportContext, render_units};
use casegen_core::{File, Mode, Overwrite, WriteResult};
use casegen_parser::extract;
use eyre::{Result, WrapErr};

use crate::{
    project,
    reports::{DeclarationReport, FailedDeclaration, GenerateReport, UnitOutcome, UnitStatus},
};

/// Options for the generate operation, already merged with `casegen.toml`.
pub struct GenerateOptions {
    pub mode: Mode,
    /// Dart package name used in `package:` imports.
    pub project_name: String,
    /// Repository class; discovered per file when absent.
    pub repository: Option<String>,
    /// Location of the `Failure` type, relative to `lib/`.
    pub failure_import: String,
    /// Output directory; derived per file when absent.
    pub output: Option<PathBuf>,
    /// Preview generated code without writing to disk.
    pub dry_run: bool,
    /// Replace files that already exist.
    pub force: bool,
}

/// Execute the generate operation over every declaration file.
///
/// A file that cannot be read or has no repository class is recorded as a
/// failure; the remaining files are still processed.
pub fn generate(paths: &[PathBuf], opts: &GenerateOptions) -> GenerateReport {
    let mut declarations = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match generate_file(path, opts) {
            Ok(report) => declarations.push(report),
            Err(err) => {
                let message = err
                    .chain()
                    .map(|cause| cause.to_string())
                    .collect::<Vec<_>>()
                    .join(": ");
                log::warn!("skipping {}: {}", path.display(), message);
                failures.push(FailedDeclaration {
                    path: path.clone(),
                    message,
                });
            }
        }
    }

    GenerateReport {
        mode: opts.mode,
        project_name: opts.project_name.clone(),
        dry_run: opts.dry_run,
        declarations,
        failures,
    }
}

fn generate_file(path: &Path, opts: &GenerateOptions) -> Result<DeclarationReport> {
    let source = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    let repository =
        project::resolve_repository_name(opts.repository.as_deref(), &source, path)?;

    let extraction = extract(&source);
    let warnings = extraction
        .warnings()
        .map(|d| super::describe(path, d))
        .collect();

    let output_dir = opts
        .output
        .clone()
        .unwrap_or_else(|| project::default_output_dir(path));
    let ctx = ImportContext::new(&opts.project_name, path.display().to_string())
        .with_failure_path(&opts.failure_import);
    let overwrite = if opts.force {
        Overwrite::Always
    } else {
        Overwrite::IfMissing
    };

    let mut units = Vec::new();
    for method in &extraction.methods {
        for unit in render_units(method, &method.name, &repository, opts.mode, &ctx) {
            let file = File::new(output_dir.join(&unit.suggested_file_name), unit.content)
                .overwrite(overwrite);
            let status = if opts.dry_run {
                UnitStatus::Preview(file.content().to_string())
            } else {
                match file.write()? {
                    WriteResult::Written => UnitStatus::Written,
                    WriteResult::Skipped => UnitStatus::Skipped,
                }
            };
            units.push(UnitOutcome {
                path: file.path().to_path_buf(),
                status,
            });
        }
    }

    Ok(DeclarationReport {
        path: path.to_path_buf(),
        repository,
        method_count: extraction.methods.len(),
        warnings,
        units,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const USER_REPOSITORY: &str = r#"
import 'package:dartz/dartz.dart';

abstract class UserRepository {
  Future<Either<Failure, User>> getUser(String userId);
  Stream<List<User>> watchUsers();
  Future<void> signOut();
}
"#;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let repos = dir.path().join("lib/domain/repositories");
        fs::create_dir_all(&repos).unwrap();
        let declaration = repos.join("user_repository.dart");
        fs::write(&declaration, USER_REPOSITORY).unwrap();
        (dir, declaration)
    }

    fn options(mode: Mode) -> GenerateOptions {
        GenerateOptions {
            mode,
            project_name: "my_app".to_string(),
            repository: None,
            failure_import: "core/error/failures.dart".to_string(),
            output: None,
            dry_run: false,
            force: false,
        }
    }

    #[test]
    fn test_writes_sibling_usecases_dir() {
        let (dir, declaration) = setup();
        let report = generate(&[declaration], &options(Mode::Simple));

        let usecases = dir.path().join("lib/domain/usecases");
        let written = fs::read_to_string(usecases.join("get_user_use_case.dart")).unwrap();
        assert!(
            written.contains("import 'package:my_app/domain/repositories/user_repository.dart';")
        );
        assert!(written.contains("class GetUserUseCase {"));
        assert!(usecases.join("watch_users_use_case.dart").exists());
        assert!(usecases.join("sign_out_use_case.dart").exists());

        let decl = &report.declarations[0];
        assert_eq!(decl.repository, "UserRepository");
        assert_eq!(decl.method_count, 3);
        assert_eq!(report.written_count(), 3);
    }

    #[test]
    fn test_existing_files_are_skipped_unless_forced() {
        let (dir, declaration) = setup();
        let target = dir.path().join("lib/domain/usecases/get_user_use_case.dart");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "// hand edited").unwrap();

        let report = generate(std::slice::from_ref(&declaration), &options(Mode::Simple));
        assert_eq!(fs::read_to_string(&target).unwrap(), "// hand edited");
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.written_count(), 2);

        let opts = GenerateOptions {
            force: true,
            ..options(Mode::Simple)
        };
        generate(&[declaration], &opts);
        assert!(fs::read_to_string(&target).unwrap().contains("GetUserUseCase"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (dir, declaration) = setup();
        let opts = GenerateOptions {
            dry_run: true,
            ..options(Mode::Professional)
        };
        let report = generate(&[declaration], &opts);

        assert!(!dir.path().join("lib/domain/usecases").exists());
        let units = &report.declarations[0].units;
        assert_eq!(units.len(), 6);
        assert!(
            units
                .iter()
                .all(|u| matches!(u.status, UnitStatus::Preview(_)))
        );
    }

    #[test]
    fn test_explicit_output_and_repository() {
        let (dir, declaration) = setup();
        let out = dir.path().join("generated");
        let opts = GenerateOptions {
            output: Some(out.clone()),
            repository: Some("UserRepo".to_string()),
            ..options(Mode::Simple)
        };
        generate(&[declaration], &opts);

        let content = fs::read_to_string(out.join("get_user_use_case.dart")).unwrap();
        assert!(content.contains("final UserRepo userRepo;"));
    }

    #[test]
    fn test_file_without_methods_warns() {
        let dir = TempDir::new().unwrap();
        let declaration = dir.path().join("empty_repository.dart");
        fs::write(&declaration, "abstract class EmptyRepository {}\n").unwrap();

        let report = generate(&[declaration], &options(Mode::Simple));
        let decl = &report.declarations[0];
        assert_eq!(decl.method_count, 0);
        assert!(decl.units.is_empty());
        assert!(decl.warnings[0].contains("no repository methods found"));
    }

    #[test]
    fn test_missing_repository_class_is_reported() {
        let dir = TempDir::new().unwrap();
        let declaration = dir.path().join("api.dart");
        fs::write(&declaration, "Future<void> ping();\n").unwrap();

        let report = generate(std::slice::from_ref(&declaration), &options(Mode::Simple));
        assert!(report.declarations.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, declaration);
        assert!(report.failures[0].message.contains("--repository"));
    }

    #[test]
    fn test_bad_file_does_not_stop_the_others() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("a_repository.dart");
        let bad = dir.path().join("b_repository.dart");
        let missing = dir.path().join("c_repository.dart");
        fs::write(
            &good,
            "abstract class PingRepository {\n  Future<void> ping();\n}\n",
        )
        .unwrap();
        fs::write(&bad, "Future<void> pong();\n").unwrap();

        let report = generate(
            &[bad.clone(), good.clone(), missing.clone()],
            &options(Mode::Simple),
        );

        assert!(dir.path().join("usecases/ping_use_case.dart").exists());
        assert_eq!(report.declarations.len(), 1);
        assert_eq!(report.declarations[0].path, good);
        assert_eq!(report.written_count(), 1);

        let failed: Vec<_> = report.failures.iter().map(|f| &f.path).collect();
        assert_eq!(failed, vec![&bad, &missing]);
        assert!(report.failures[1].message.contains("failed to read"));
    }
}
