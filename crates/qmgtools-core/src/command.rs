//! External command invocation.
//!
//! Every CL command this job issues goes through the IBM i `qsh` interpreter
//! as `qsh -c 'system -i "<CL command>"'`. The child's stdout and stderr are
//! captured as text; its exit status is recorded but never decides success,
//! because `system -i` reports CL failures through message IDs in the output.

use std::process::{Command, Output, Stdio};

use crate::error::{Result, UpdateError};

/// One blocking execution of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run a CL command through `system -i` inside the given shell interpreter.
    pub fn cl_command(interpreter: &str, cl: &str) -> Self {
        Self::new(interpreter, ["-c".to_string(), format!("system -i \"{cl}\"")])
    }
}

/// Captured result of an [`Invocation`].
///
/// Both streams are stored trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the child was terminated by a signal.
    pub status: Option<i32>,
}

impl CommandOutput {
    pub fn new(stdout: &str, stderr: &str, status: Option<i32>) -> Self {
        Self {
            stdout: stdout.trim().to_string(),
            stderr: stderr.trim().to_string(),
            status,
        }
    }

    fn from_output(output: &Output) -> Self {
        Self::new(
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
            output.status.code(),
        )
    }
}

/// Process seam between the runner and the host.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Runs invocations as real child processes, blocking until each exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let resolved =
            which::which(&invocation.program).map_err(|source| UpdateError::InterpreterNotFound {
                program: invocation.program.clone(),
                source,
            })?;

        tracing::debug!(
            program = %resolved.display(),
            args = ?invocation.args,
            "spawning command"
        );

        let output = Command::new(&resolved)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| UpdateError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let captured = CommandOutput::from_output(&output);
        tracing::debug!(status = ?captured.status, "command finished");
        Ok(captured)
    }
}
