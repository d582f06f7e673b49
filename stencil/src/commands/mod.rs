mod check;
mod clean;
mod completions;
mod config;
mod generate;
mod plan;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use config::ConfigCommand;
use eyre::Result;
use generate::GenerateCommand;
use plan::PlanCommand;
use stencilpack_config::StencilToml;
use stencilpack_driver::Flavor;

use crate::ops::Selection;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stencilpack_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version)]
#[command(about = "Run Sourcery stencil packs over the units of a project")]
pub(crate) struct Cli {
    /// Log more (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Config(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Clean and regenerate the selected units
    Generate(GenerateCommand),

    /// Print the steps generate would run
    Plan(PlanCommand),

    /// Remove generated output of the selected units
    Clean(CleanCommand),

    /// Show the effective configuration of a unit
    Config(ConfigCommand),

    /// Validate stencil.toml without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by commands that operate on a set of units.
#[derive(Args)]
pub(crate) struct SelectionArgs {
    /// Path to stencil.toml (defaults to ./stencil.toml)
    #[arg(short, long, default_value = "stencil.toml")]
    pub manifest: PathBuf,

    /// Only run this flavor (defaults to the flavors each unit declares)
    #[arg(short, long)]
    pub flavor: Option<Flavor>,

    /// Unit to process, may be repeated (defaults to every unit)
    #[arg(short, long = "unit", value_name = "NAME")]
    pub units: Vec<String>,

    /// Template directory, overriding [project] templates_dir
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Generator program, overriding [project] generator
    #[arg(long, value_name = "PATH")]
    pub generator: Option<String>,
}

impl SelectionArgs {
    pub fn open(&self) -> StencilToml {
        StencilToml::open(&self.manifest).unwrap_or_exit()
    }

    pub fn selection(&self) -> Selection<'_> {
        Selection {
            flavor: self.flavor,
            units: &self.units,
            templates_dir: self.templates_dir.as_deref(),
            generator: self.generator.as_deref(),
        }
    }
}
