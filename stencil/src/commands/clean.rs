use clap::Args;
use eyre::Result;

use super::SelectionArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let stencil_toml = self.selection.open();
        let report = ops::clean(&stencil_toml, &self.selection.selection(), self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
