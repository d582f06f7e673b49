use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stencilpack_config::StencilToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to stencil.toml (defaults to ./stencil.toml)
    #[arg(short, long, default_value = "stencil.toml")]
    pub manifest: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let stencil_toml = StencilToml::open(&self.manifest).unwrap_or_exit();
        let report = ops::check(&stencil_toml);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
