//! Clean operation - remove generated output.

use eyre::{Context, Result};
use stencilpack_config::StencilToml;
use stencilpack_driver::CleanOutcome;

use super::Selection;
use crate::reports::CleanReport;

/// Remove the generated output directory of every selected pass.
///
/// Generator caches are left in place.
pub fn clean(stencil_toml: &StencilToml, selection: &Selection, dry_run: bool) -> Result<CleanReport> {
    let passes = selection.passes(stencil_toml)?;
    let program = selection.generator(stencil_toml);

    let mut report = CleanReport {
        dry_run,
        ..Default::default()
    };

    for (unit, flavor) in &passes {
        let driver = selection.driver(stencil_toml, *flavor, program.clone().into())?;
        if dry_run {
            let target = driver.prepare(unit).plan.clean.target;
            if target.exists() {
                report.removed.push(target);
            }
            continue;
        }

        let (target, outcome) = driver
            .clean(unit)
            .wrap_err_with(|| format!("Failed to clean '{}'", unit.name()))?;
        tracing::debug!(unit = unit.name(), target = %target.display(), ?outcome, "clean");
        if outcome == CleanOutcome::Removed {
            report.removed.push(target);
        }
    }

    Ok(report)
}
