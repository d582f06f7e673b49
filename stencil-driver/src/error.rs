use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;

/// Fatal problems running a generation pass.
///
/// A missing generator is an environment problem detected before any step
/// runs; the other variants describe a generator that was started.
#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("code generator '{program}' not found: {reason}")]
    #[diagnostic(
        code(stencil::driver::generator_not_found),
        help("install the generator, or point [project] generator in stencil.toml at it")
    )]
    GeneratorNotFound { program: String, reason: String },

    #[error("failed to launch '{program}'")]
    #[diagnostic(code(stencil::driver::launch))]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("code generation for '{unit}' failed ({})\n{stderr}", exit_description(.code))]
    #[diagnostic(code(stencil::driver::generator_failed))]
    GeneratorFailed {
        unit: String,
        code: Option<i32>,
        /// The generator's standard error, verbatim.
        stderr: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
