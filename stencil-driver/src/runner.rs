//! Process execution port.
//!
//! The driver never spawns processes directly; it hands an [`Invocation`] to
//! a [`CommandRunner`]. [`SystemRunner`] is the real implementation.

use std::{
    io,
    path::PathBuf,
    process::{Command, Stdio},
};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    /// Render as a single shell-style line for logs and reports.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .map(|part| shell_quote(&part))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `part` for display when it contains characters a shell would split
/// or expand.
fn shell_quote(part: &str) -> String {
    let plain = !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        part.to_string()
    } else {
        format!("'{}'", part.replace('\'', r"'\''"))
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external processes to completion.
pub trait CommandRunner: Send + Sync {
    /// Run `invocation`, waiting for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned. A process that runs
    /// and exits non-zero is not an error at this level.
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// Runs processes with [`std::process::Command`], capturing their output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
