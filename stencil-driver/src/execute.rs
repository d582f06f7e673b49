//! Running generation plans.

use std::path::PathBuf;

use stencilpack_config::ConfigLoader;
use stencilpack_core::{
    BuildUnit, ConfigSchema, DecodeError, Diagnostic, Diagnostics, Flavor, GenerationConfig,
    resolve,
};

use crate::{
    DriverError, Result,
    plan::{CleanOutcome, GenerationPlan},
    runner::{CommandRunner, SystemRunner},
};

/// Phase name attached to clean step diagnostics.
pub const CLEAN_PHASE: &str = "clean";

/// A successful generation pass.
#[derive(Debug, Clone)]
pub struct Execution {
    pub plan: GenerationPlan,
    /// Exit code of the generator; always `Some(0)` for a finished pass.
    pub code: Option<i32>,
    /// The generator's standard output (it runs with `--verbose`).
    pub stdout: String,
    /// The generator's standard error, verbatim. Generators may print
    /// warnings here and still succeed.
    pub stderr: String,
}

/// Run `plan`: clean, then generate.
///
/// The generator executable is checked before anything runs. Clean step
/// diagnostics are pushed onto `diagnostics` whatever the outcome, and a
/// failed clean does not stop generation. A failed generation is returned
/// with the generator's stderr, untouched. Nothing is retried.
pub fn execute(
    plan: &GenerationPlan,
    runner: &dyn CommandRunner,
    diagnostics: &mut Diagnostics,
) -> Result<Execution> {
    let executable = &plan.generate.executable;
    if !executable.is_file() {
        return Err(DriverError::GeneratorNotFound {
            program: executable.display().to_string(),
            reason: "no such file".to_string(),
        });
    }

    let target = plan.clean.target.display().to_string();
    match plan.clean.run() {
        Ok(CleanOutcome::Removed) => {
            tracing::debug!(unit = %plan.unit, %target, "removed generated output");
        }
        Ok(CleanOutcome::NotPresent) => {
            diagnostics.push(
                Diagnostic::info(CLEAN_PHASE, "no previously generated files").at(target),
            );
        }
        Err(e) => {
            tracing::warn!(unit = %plan.unit, %target, error = %e, "clean failed");
            diagnostics.push(
                Diagnostic::warning(
                    CLEAN_PHASE,
                    format!("failed to remove previously generated files: {}", e),
                )
                .at(target),
            );
        }
    }

    let invocation = plan.generate.invocation();
    tracing::debug!(unit = %plan.unit, command = %invocation.command_line(), "running generator");

    let output = runner
        .run(&invocation)
        .map_err(|source| DriverError::Launch {
            program: invocation.program.clone(),
            source,
        })?;

    if !output.success() {
        return Err(DriverError::GeneratorFailed {
            unit: plan.unit.clone(),
            code: output.code,
            stderr: output.stderr,
        });
    }

    Ok(Execution {
        plan: plan.clone(),
        code: output.code,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// A plan together with the configuration it was derived from.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub plan: GenerationPlan,
    pub config: GenerationConfig,
    pub diagnostics: Diagnostics,
}

/// Drives one flavor of the generator over build units.
///
/// Units are independent: each gets its own work directory, and nothing is
/// shared between passes.
pub struct Driver {
    flavor: Flavor,
    schema: ConfigSchema,
    executable: PathBuf,
    templates_dir: PathBuf,
    work_root: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl Driver {
    /// Create a driver running `executable`, which should already have been
    /// located with [`crate::locate_generator`].
    pub fn new(
        flavor: Flavor,
        executable: impl Into<PathBuf>,
        templates_dir: impl Into<PathBuf>,
        work_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            flavor,
            schema: flavor.schema(),
            executable: executable.into(),
            templates_dir: templates_dir.into(),
            work_root: work_root.into(),
            runner: Box::new(SystemRunner),
        }
    }

    /// Replace the process runner.
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Override the default of the `debugOnly` option.
    pub fn with_debug_only_default(
        mut self,
        debug_only: bool,
    ) -> std::result::Result<Self, DecodeError> {
        self.schema = self
            .schema
            .with_default(GenerationConfig::DEBUG_ONLY, debug_only)?;
        Ok(self)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Work directory for `unit`.
    pub fn work_dir(&self, unit: &BuildUnit) -> PathBuf {
        self.flavor.work_dir(&self.work_root, unit)
    }

    /// Load the unit's configuration, collecting any loader warning.
    pub fn load_config(&self, unit: &BuildUnit, diagnostics: &mut Diagnostics) -> GenerationConfig {
        ConfigLoader::new(&self.schema).load(&self.flavor.config_path(unit), diagnostics)
    }

    /// Resolve, load configuration and build the plan for `unit`.
    pub fn prepare(&self, unit: &BuildUnit) -> Prepared {
        let mut diagnostics = Diagnostics::new();
        let config = self.load_config(unit, &mut diagnostics);
        let resolution = resolve(unit, &config);
        let plan = GenerationPlan::build(
            unit,
            &resolution,
            &self.flavor.templates(&self.templates_dir),
            &config,
            &self.executable,
            &self.work_dir(unit),
        );
        Prepared {
            plan,
            config,
            diagnostics,
        }
    }

    /// Prepare and execute the plan for `unit`.
    ///
    /// Diagnostics from every stage land in `diagnostics` even when the pass
    /// fails, so a config fallback that led to a failing generator is still
    /// reported.
    pub fn run(&self, unit: &BuildUnit, diagnostics: &mut Diagnostics) -> Result<Execution> {
        let prepared = self.prepare(unit);
        diagnostics.extend(prepared.diagnostics);
        execute(&prepared.plan, &*self.runner, diagnostics)
    }

    /// Remove the generated output of `unit` without regenerating it.
    pub fn clean(&self, unit: &BuildUnit) -> std::io::Result<(PathBuf, CleanOutcome)> {
        let plan = self.prepare(unit).plan;
        let outcome = plan.clean.run()?;
        Ok((plan.clean.target, outcome))
    }
}
