//! Plan operation - show what generate would run.

use std::path::PathBuf;

use eyre::Result;
use stencilpack_config::StencilToml;
use stencilpack_driver::locate_generator;

use super::{Selection, warning_messages};
use crate::reports::{PlanReport, PlannedPass};

/// Build the plan of every selected pass without running it.
///
/// A generator that can't be located is reported as a warning and the
/// configured program is shown as-is.
pub fn plan(stencil_toml: &StencilToml, selection: &Selection) -> Result<PlanReport> {
    let passes = selection.passes(stencil_toml)?;
    let program = selection.generator(stencil_toml);

    let mut report = PlanReport::default();
    let executable = match locate_generator(&program) {
        Ok(path) => path,
        Err(err) => {
            report.warnings.push(err.to_string());
            PathBuf::from(&program)
        }
    };

    for (unit, flavor) in &passes {
        let driver = selection.driver(stencil_toml, *flavor, executable.clone())?;
        let prepared = driver.prepare(unit);
        report.passes.push(PlannedPass {
            unit: unit.name().to_string(),
            flavor: *flavor,
            clean_command: prepared.plan.clean.display_command(),
            command_line: prepared.plan.command_line(),
            output_dir: prepared.plan.output_dir().to_path_buf(),
            warnings: warning_messages(&prepared.diagnostics),
        });
    }

    Ok(report)
}
