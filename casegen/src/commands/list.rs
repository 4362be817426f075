use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops, project,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Repository declaration file, or a directory to search for *_repository.dart
    pub path: PathBuf,

    /// Print the extracted methods as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let declarations = project::collect_declarations(std::slice::from_ref(&self.path))?;
        let report = ops::list(&declarations)?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
