//! Generate command report data structures.

use std::path::PathBuf;

use stencilpack_driver::{DriverError, Flavor};

use super::output::{Output, Report};

/// One completed generation pass.
#[derive(Debug)]
pub struct GeneratedPass {
    pub unit: String,
    pub flavor: Flavor,
    /// Directory the generator wrote into.
    pub output_dir: PathBuf,
    /// Warnings collected while preparing and running the pass.
    pub warnings: Vec<String>,
    /// Whatever the generator printed to stderr while still succeeding.
    pub stderr: String,
}

/// The pass that stopped a generate run.
#[derive(Debug)]
pub struct FailedPass {
    pub unit: String,
    pub flavor: Flavor,
    /// Warnings collected before the pass failed.
    pub warnings: Vec<String>,
    pub error: DriverError,
}

/// Report data from a generate run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Passes that completed, in run order.
    pub passes: Vec<GeneratedPass>,
    pub failure: Option<FailedPass>,
}

fn pass_warnings(out: &mut dyn Output, unit: &str, flavor: Flavor, warnings: &[String]) {
    for warning in warnings {
        out.warning(&format!("{} ({}): {}", unit, flavor, warning));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for pass in &self.passes {
            pass_warnings(out, &pass.unit, pass.flavor, &pass.warnings);
        }
        if let Some(failure) = &self.failure {
            pass_warnings(out, &failure.unit, failure.flavor, &failure.warnings);
        }

        if self.passes.is_empty() {
            if self.failure.is_none() {
                out.preformatted("No units to generate.");
            }
            return;
        }

        out.section("Generated");
        for pass in &self.passes {
            out.added_item(&format!(
                "{} ({}) -> {}",
                pass.unit,
                pass.flavor.display_name(),
                pass.output_dir.display()
            ));
        }

        for pass in self.passes.iter().filter(|p| !p.stderr.trim().is_empty()) {
            out.newline();
            out.divider(&format!("{} ({}) stderr", pass.unit, pass.flavor.display_name()));
            out.preformatted(pass.stderr.trim_end());
        }

        if self.failure.is_some() {
            out.newline();
        }
    }
}
