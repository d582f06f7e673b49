//! Generate operation - clean and regenerate each selected unit.

use eyre::Result;
use stencilpack_config::StencilToml;
use stencilpack_core::Diagnostics;
use stencilpack_driver::locate_generator;

use super::{Selection, warning_messages};
use crate::reports::{FailedPass, GenerateReport, GeneratedPass};

/// Execute the generate operation.
///
/// Passes run one at a time, each unit with its own flavors. The first failed
/// pass stops the run and is returned in the report, with the warnings it
/// collected, alongside the passes that completed before it.
pub fn generate(stencil_toml: &StencilToml, selection: &Selection) -> Result<GenerateReport> {
    let passes = selection.passes(stencil_toml)?;
    let executable = locate_generator(&selection.generator(stencil_toml))?;

    let mut report = GenerateReport::default();
    for (unit, flavor) in passes {
        let driver = selection.driver(stencil_toml, flavor, executable.clone())?;
        tracing::info!(unit = unit.name(), %flavor, "generating");

        let mut diagnostics = Diagnostics::new();
        let result = driver.run(&unit, &mut diagnostics);
        let warnings = warning_messages(&diagnostics);
        match result {
            Ok(execution) => report.passes.push(GeneratedPass {
                unit: unit.name().to_string(),
                flavor,
                output_dir: execution.plan.output_dir().to_path_buf(),
                warnings,
                stderr: execution.stderr,
            }),
            Err(error) => {
                report.failure = Some(FailedPass {
                    unit: unit.name().to_string(),
                    flavor,
                    warnings,
                    error,
                });
                return Ok(report);
            }
        }
    }

    Ok(report)
}
