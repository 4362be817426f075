use std::path::PathBuf;

use casegen_config::{CONFIG_FILE_NAME, Config};
use casegen_core::Mode;
use clap::Args;
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    project,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Repository declaration files, or directories to search for *_repository.dart
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Repository class to wrap (defaults to the `class <Name>Repository` in each file)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Generation mode: simple or professional (overrides casegen.toml)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Dart package name for imports (defaults to the name in pubspec.yaml)
    #[arg(short, long)]
    pub project_name: Option<String>,

    /// Path to pubspec.yaml
    #[arg(long, default_value = "pubspec.yaml")]
    pub pubspec: PathBuf,

    /// Output directory (defaults to a `usecases` directory beside each repository)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to casegen.toml
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load_or_default(&self.config).unwrap_or_exit();
        let generator = config.generator;

        let declarations = project::collect_declarations(&self.paths)?;
        let options = GenerateOptions {
            mode: self.mode.unwrap_or(generator.mode),
            project_name: project::resolve_project_name(
                self.project_name.as_deref(),
                &self.pubspec,
                &generator.fallback_project_name,
            ),
            repository: self.repository.clone(),
            failure_import: generator.failure_import,
            output: self.output.clone().or(generator.output),
            dry_run: self.dry_run,
            force: self.force,
        };

        let report = ops::generate(&declarations, &options);
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            bail!(
                "Failed to generate use cases for {} of {} files",
                report.failures.len(),
                declarations.len()
            );
        }
        Ok(())
    }
}
