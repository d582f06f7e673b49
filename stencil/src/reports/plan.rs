//! Plan command report data structures.

use std::path::PathBuf;

use stencilpack_driver::Flavor;

use super::output::{Output, Report};

/// The steps one generation pass would run.
#[derive(Debug)]
pub struct PlannedPass {
    pub unit: String,
    pub flavor: Flavor,
    pub clean_command: String,
    pub command_line: String,
    /// Output directory declared to the host build system.
    pub output_dir: PathBuf,
    pub warnings: Vec<String>,
}

/// Report data from planning without running.
#[derive(Debug, Default)]
pub struct PlanReport {
    /// Warnings not tied to a single pass.
    pub warnings: Vec<String>,
    pub passes: Vec<PlannedPass>,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.passes.is_empty() {
            out.preformatted("No units selected.");
            return;
        }

        for pass in &self.passes {
            for warning in &pass.warnings {
                out.warning(&format!("{} ({}): {}", pass.unit, pass.flavor, warning));
            }
            out.divider(&format!("{} ({})", pass.unit, pass.flavor.display_name()));
            out.key_value("clean", &pass.clean_command);
            out.key_value("generate", &pass.command_line);
            out.key_value("output", &pass.output_dir.display().to_string());
        }
    }
}
