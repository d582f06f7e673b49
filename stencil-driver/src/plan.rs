//! Generation plans.
//!
//! A plan is the ordered pair of steps run for one unit: purge the generated
//! output directory, then invoke the generator into that same directory. Both
//! steps are derived from one work directory, so the directory the clean step
//! purges is always the one the generate step declares as its output.

use std::{
    io,
    path::{Path, PathBuf},
};

use stencilpack_core::{BuildUnit, GenerationConfig, Resolution, format_string_list};

use crate::runner::Invocation;

/// Subdirectory of a unit's work directory holding generated sources.
pub const OUTPUT_DIR: &str = "Generated";
/// Subdirectory of a unit's work directory holding the generator's cache.
pub const CACHE_DIR: &str = "Cache";

/// What the clean step found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Removed,
    NotPresent,
}

/// Recursive, idempotent delete of the generated output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanStep {
    pub target: PathBuf,
}

impl CleanStep {
    /// Delete the target directory. A missing directory is not an error.
    pub fn run(&self) -> io::Result<CleanOutcome> {
        match std::fs::remove_dir_all(&self.target) {
            Ok(()) => Ok(CleanOutcome::Removed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CleanOutcome::NotPresent),
            Err(e) => Err(e),
        }
    }

    /// The equivalent shell command, for display.
    pub fn display_command(&self) -> String {
        Invocation {
            program: PathBuf::from("rm"),
            args: vec!["-rf".to_string(), self.target.display().to_string()],
        }
        .command_line()
    }
}

/// The generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateStep {
    pub executable: PathBuf,
    pub sources: Vec<PathBuf>,
    pub templates: Vec<PathBuf>,
    /// `key=value` strings passed with `--args`, imports first.
    pub arguments: Vec<String>,
    pub output_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl GenerateStep {
    /// Full argument list, in a stable order.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for source in &self.sources {
            args.push("--sources".to_string());
            args.push(source.display().to_string());
        }
        for template in &self.templates {
            args.push("--templates".to_string());
            args.push(template.display().to_string());
        }
        for argument in &self.arguments {
            args.push("--args".to_string());
            args.push(argument.clone());
        }
        args.push("--output".to_string());
        args.push(self.output_dir.display().to_string());
        args.push("--cacheBasePath".to_string());
        args.push(self.cache_dir.display().to_string());
        args.push("--verbose".to_string());
        args
    }

    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: self.executable.clone(),
            args: self.args(),
        }
    }
}

/// The ordered steps for one build unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub unit: String,
    pub clean: CleanStep,
    pub generate: GenerateStep,
}

impl GenerationPlan {
    /// Derive the plan for `unit`.
    ///
    /// `work_dir` must be owned by this unit alone; output and cache
    /// directories are created beneath it.
    pub fn build(
        unit: &BuildUnit,
        resolution: &Resolution,
        templates: &[PathBuf],
        config: &GenerationConfig,
        executable: &Path,
        work_dir: &Path,
    ) -> Self {
        let output_dir = work_dir.join(OUTPUT_DIR);
        let cache_dir = work_dir.join(CACHE_DIR);

        let mut arguments = vec![
            format!(
                "{}={}",
                GenerationConfig::IMPORTS,
                format_string_list(resolution.imports.as_slice())
            ),
            format!(
                "{}={}",
                GenerationConfig::TESTABLE_IMPORTS,
                format_string_list(resolution.testable_imports.as_slice())
            ),
        ];
        arguments.extend(config.arguments());

        Self {
            unit: unit.name().to_string(),
            clean: CleanStep {
                target: output_dir.clone(),
            },
            generate: GenerateStep {
                executable: executable.to_path_buf(),
                sources: resolution.sources.clone(),
                templates: templates.to_vec(),
                arguments,
                output_dir,
                cache_dir,
            },
        }
    }

    /// Directory the generator writes into, declared to the host for
    /// freshness tracking.
    pub fn output_dir(&self) -> &Path {
        &self.generate.output_dir
    }

    /// The generate step as a shell-style line.
    pub fn command_line(&self) -> String {
        self.generate.invocation().command_line()
    }
}
