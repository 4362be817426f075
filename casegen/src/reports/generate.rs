//! Generate command report data structures.

use std::path::PathBuf;

use casegen_core::Mode;

use super::output::{Output, Report};

/// Report data from use case generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub mode: Mode,
    /// Package name used in `package:` imports.
    pub project_name: String,
    pub dry_run: bool,
    /// One entry per declaration file that was processed, in input order.
    pub declarations: Vec<DeclarationReport>,
    /// Declaration files that could not be processed.
    pub failures: Vec<FailedDeclaration>,
}

/// A declaration file that was skipped because it could not be processed.
#[derive(Debug)]
pub struct FailedDeclaration {
    pub path: PathBuf,
    pub message: String,
}

/// What happened for one declaration file.
#[derive(Debug)]
pub struct DeclarationReport {
    pub path: PathBuf,
    /// Repository class the use cases wrap.
    pub repository: String,
    pub method_count: usize,
    /// Extraction warnings, already prefixed with their location.
    pub warnings: Vec<String>,
    pub units: Vec<UnitOutcome>,
}

/// A generated file and what was done with it.
#[derive(Debug)]
pub struct UnitOutcome {
    pub path: PathBuf,
    pub status: UnitStatus,
}

#[derive(Debug)]
pub enum UnitStatus {
    Written,
    /// Already existed and `--force` was not given.
    Skipped,
    /// Dry run; carries the content that would be written.
    Preview(String),
}

impl GenerateReport {
    fn units(&self) -> impl Iterator<Item = &UnitOutcome> {
        self.declarations.iter().flat_map(|d| d.units.iter())
    }

    pub fn written_count(&self) -> usize {
        self.units()
            .filter(|u| matches!(u.status, UnitStatus::Written))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.units()
            .filter(|u| matches!(u.status, UnitStatus::Skipped))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn failed_suffix(&self) -> String {
        match self.failures.len() {
            0 => String::new(),
            n => format!(", {} file{} failed", n, if n == 1 { "" } else { "s" }),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!("{}: {}", failure.path.display(), failure.message));
        }
        for declaration in &self.declarations {
            for warning in &declaration.warnings {
                out.warning(warning);
            }
        }

        for declaration in &self.declarations {
            out.section(&format!(
                "{} ({}, {} method{})",
                declaration.path.display(),
                declaration.repository,
                declaration.method_count,
                if declaration.method_count == 1 { "" } else { "s" }
            ));
            for unit in &declaration.units {
                let path = unit.path.display().to_string();
                match &unit.status {
                    UnitStatus::Written => out.added_item(&path),
                    UnitStatus::Skipped => {
                        out.list_item(&format!("{} (exists, use --force to overwrite)", path))
                    }
                    UnitStatus::Preview(_) => out.list_item(&path),
                }
            }
        }

        if self.dry_run {
            for unit in self.units() {
                if let UnitStatus::Preview(content) = &unit.status {
                    out.newline();
                    out.divider(&unit.path.display().to_string());
                    out.preformatted(content);
                }
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} files would be generated ({} mode, package {}){}",
                self.units().count(),
                self.mode,
                self.project_name,
                self.failed_suffix()
            ));
        } else {
            out.newline();
            out.preformatted(&format!(
                "Generated {} files, skipped {} ({} mode, package {}){}",
                self.written_count(),
                self.skipped_count(),
                self.mode,
                self.project_name,
                self.failed_suffix()
            ));
        }
    }
}
