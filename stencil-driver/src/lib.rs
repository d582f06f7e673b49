// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Plans and runs code generator passes for build units.
//!
//! For each unit a [`Driver`] loads the flavor's config file, resolves the
//! unit's sources and imports, and builds a [`GenerationPlan`]: purge the
//! generated output, then invoke the generator into it.

mod error;
mod execute;
mod locate;
mod plan;
mod runner;

pub use error::{DriverError, Result};
pub use execute::{CLEAN_PHASE, Driver, Execution, Prepared, execute};
pub use stencilpack_core::Flavor;
pub use locate::locate_generator;
pub use plan::{CACHE_DIR, CleanOutcome, CleanStep, GenerateStep, GenerationPlan, OUTPUT_DIR};
pub use runner::{CommandOutput, CommandRunner, Invocation, SystemRunner};
