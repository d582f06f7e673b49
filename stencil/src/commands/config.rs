use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stencilpack_config::StencilToml;
use stencilpack_driver::Flavor;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConfigCommand {
    /// Path to stencil.toml (defaults to ./stencil.toml)
    #[arg(short, long, default_value = "stencil.toml")]
    pub manifest: PathBuf,

    /// Unit to inspect
    #[arg(short, long, value_name = "NAME")]
    pub unit: String,

    /// Flavor to inspect (defaults to the flavors the unit declares)
    #[arg(short, long)]
    pub flavor: Option<Flavor>,
}

impl ConfigCommand {
    pub fn run(&self) -> Result<()> {
        let stencil_toml = StencilToml::open(&self.manifest).unwrap_or_exit();
        let report = ops::config(&stencil_toml, &self.unit, self.flavor)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
