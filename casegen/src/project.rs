//! Project discovery: declaration files, repository and package names, output paths.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};
use serde::Deserialize;
use walkdir::WalkDir;

/// Suffix of the files `generate` and `list` pick up when walking a directory.
pub const DECLARATION_SUFFIX: &str = "_repository.dart";

const USE_CASES_DIR: &str = "usecases";
const REPOSITORIES_DIR: &str = "repositories";

#[derive(Debug, Deserialize)]
struct Pubspec {
    name: Option<String>,
}

/// Expand each path into declaration files.
///
/// Files are taken as given; directories are walked recursively for
/// `*_repository.dart`, in sorted order.
pub fn collect_declarations(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry =
                    entry.wrap_err_with(|| format!("failed to walk '{}'", path.display()))?;
                let is_declaration = entry.file_type().is_file()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.ends_with(DECLARATION_SUFFIX));
                if is_declaration {
                    found.push(entry.into_path());
                }
            }
            if found.is_empty() {
                log::warn!(
                    "no *{} files found under {}",
                    DECLARATION_SUFFIX,
                    path.display()
                );
            }
            files.extend(found);
        } else {
            bail!("'{}' does not exist", path.display());
        }
    }
    Ok(files)
}

/// The package name from `pubspec.yaml`, if it exists and declares one.
pub fn pubspec_name(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("cannot read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_yaml::from_str::<Pubspec>(&content) {
        Ok(pubspec) => pubspec.name.filter(|name| !name.trim().is_empty()),
        Err(e) => {
            log::warn!("ignoring unparsable {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve the package name: explicit flag, then `pubspec.yaml`, then the fallback.
pub fn resolve_project_name(explicit: Option<&str>, pubspec: &Path, fallback: &str) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    pubspec_name(pubspec).unwrap_or_else(|| {
        log::info!(
            "no package name in {}, using '{}'",
            pubspec.display(),
            fallback
        );
        fallback.to_string()
    })
}

/// Resolve the repository class: explicit flag, else the `class <Name>Repository` in `source`.
pub fn resolve_repository_name(
    explicit: Option<&str>,
    source: &str,
    declaration: &Path,
) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    match casegen_parser::find_repository_name(source) {
        Some(name) => Ok(name),
        None => bail!(
            "no `class <Name>Repository` found in '{}'; pass --repository <Name>",
            declaration.display()
        ),
    }
}

/// Where use cases for `declaration` go when no output directory is given.
///
/// A declaration inside `repositories/` gets a sibling `usecases/`
/// (`domain/repositories/x.dart` -> `domain/usecases/`); anything else gets
/// `usecases/` next to the file.
pub fn default_output_dir(declaration: &Path) -> PathBuf {
    let parent = declaration.parent().unwrap_or_else(|| Path::new(""));
    let in_repositories = parent
        .file_name()
        .is_some_and(|name| name == REPOSITORIES_DIR);

    match parent.parent() {
        Some(grandparent) if in_repositories => grandparent.join(USE_CASES_DIR),
        _ => parent.join(USE_CASES_DIR),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir(Path::new("lib/domain/repositories/user_repository.dart")),
            PathBuf::from("lib/domain/usecases")
        );
        assert_eq!(
            default_output_dir(Path::new("lib/data/user_repository.dart")),
            PathBuf::from("lib/data/usecases")
        );
        assert_eq!(
            default_output_dir(Path::new("user_repository.dart")),
            PathBuf::from("usecases")
        );
    }

    #[test]
    fn test_collect_declarations_walks_directories() {
        let dir = TempDir::new().unwrap();
        let repos = dir.path().join("lib/domain/repositories");
        fs::create_dir_all(&repos).unwrap();
        fs::write(repos.join("user_repository.dart"), "").unwrap();
        fs::write(repos.join("auth_repository.dart"), "").unwrap();
        fs::write(repos.join("README.md"), "").unwrap();
        fs::write(dir.path().join("lib/main.dart"), "").unwrap();

        let files = collect_declarations(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["auth_repository.dart", "user_repository.dart"]);
    }

    #[test]
    fn test_collect_declarations_keeps_explicit_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("orders.dart");
        fs::write(&file, "").unwrap();

        let files = collect_declarations(std::slice::from_ref(&file)).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_collect_declarations_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = collect_declarations(&[dir.path().join("nope")]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_project_name_resolution() {
        let dir = TempDir::new().unwrap();
        let pubspec = dir.path().join("pubspec.yaml");

        assert_eq!(resolve_project_name(None, &pubspec, "my_app"), "my_app");

        fs::write(&pubspec, "name: shop\ndependencies:\n  dartz: ^0.10.1\n").unwrap();
        assert_eq!(resolve_project_name(None, &pubspec, "my_app"), "shop");
        assert_eq!(
            resolve_project_name(Some("override"), &pubspec, "my_app"),
            "override"
        );
    }

    #[test]
    fn test_unparsable_pubspec_falls_back() {
        let dir = TempDir::new().unwrap();
        let pubspec = dir.path().join("pubspec.yaml");
        fs::write(&pubspec, "name: [unterminated\n").unwrap();
        assert_eq!(pubspec_name(&pubspec), None);

        fs::write(&pubspec, "description: no name here\n").unwrap();
        assert_eq!(resolve_project_name(None, &pubspec, "fallback"), "fallback");
    }

    #[test]
    fn test_repository_name_resolution() {
        let path = Path::new("user_repository.dart");
        let source = "abstract interface class UserRepository {}";
        assert_eq!(
            resolve_repository_name(None, source, path).unwrap(),
            "UserRepository"
        );
        assert_eq!(
            resolve_repository_name(Some("Users"), source, path).unwrap(),
            "Users"
        );

        let err = resolve_repository_name(None, "class Service {}", path).unwrap_err();
        assert!(err.to_string().contains("--repository"));
    }
}
