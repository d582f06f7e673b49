//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod config;
mod generate;
mod output;
mod plan;

pub use check::{CheckReport, UnitSummary};
pub use clean::CleanReport;
pub use config::{ConfigReport, FlavorConfig};
pub use generate::{FailedPass, GenerateReport, GeneratedPass};
pub use output::{Report, TerminalOutput};
pub use plan::{PlanReport, PlannedPass};

#[cfg(test)]
pub(crate) use output::testing;
