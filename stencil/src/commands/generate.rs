use clap::Args;
use eyre::Result;

use super::SelectionArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the plans without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let stencil_toml = self.selection.open();
        let selection = self.selection.selection();

        if self.dry_run {
            let report = ops::plan(&stencil_toml, &selection)?;
            report.render(&mut TerminalOutput::new());
            return Ok(());
        }

        let report = ops::generate(&stencil_toml, &selection)?;
        report.render(&mut TerminalOutput::new());

        match report.failure {
            Some(failure) => Err(failure.error.into()),
            None => Ok(()),
        }
    }
}
