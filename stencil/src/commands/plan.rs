use clap::Args;
use eyre::Result;

use super::SelectionArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let stencil_toml = self.selection.open();
        let report = ops::plan(&stencil_toml, &self.selection.selection())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
