use crate::domain::{Placeholder, Variables};
use crate::error::{ReleaseError, Result};
use crate::hooks::{HookPhase, SkipPolicy};
use std::fmt;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Exit status of a shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellStatus {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ShellStatus {
    pub fn from_code(code: i32) -> Self {
        ShellStatus { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ShellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Something that can execute a hook command line
pub trait Shell {
    fn run(&self, command: &str) -> Result<ShellStatus>;
}

/// Runs commands through the system shell, inheriting stdin/stdout/stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&self, command: &str) -> Result<ShellStatus> {
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        };

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(ShellStatus {
            code: status.code(),
        })
    }
}

/// What happened to a phase's hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// The skip policy disabled the phase
    Skipped,
    /// This many hooks ran, all successfully
    Ran(usize),
}

/// Executes the configured hook commands of a phase
pub struct HookExecutor<'a, S: Shell> {
    shell: &'a S,
}

impl<'a, S: Shell> HookExecutor<'a, S> {
    pub fn new(shell: &'a S) -> Self {
        HookExecutor { shell }
    }

    /// Run every hook of `phase` in declaration order.
    ///
    /// Each hook is resolved against `variables` and executed as one shell
    /// command. The first hook that cannot start or exits non-zero aborts the
    /// phase with [ReleaseError::HookFailed]; later hooks never run.
    pub fn run_all(
        &self,
        phase: HookPhase,
        hooks: &[Placeholder],
        variables: &Variables,
        skip: &SkipPolicy,
    ) -> Result<HookOutcome> {
        if skip.should_skip(phase.name()) {
            info!(phase = phase.name(), "skipping hooks");
            return Ok(HookOutcome::Skipped);
        }

        for (index, hook) in hooks.iter().enumerate() {
            let command = hook.resolve(variables);
            debug!(phase = phase.name(), index, command = %command, "running hook");

            let failed = |status: String| ReleaseError::HookFailed {
                phase: phase.name().to_string(),
                index,
                command: command.clone(),
                status,
            };

            let status = self
                .shell
                .run(&command)
                .map_err(|e| failed(format!("failed to start: {}", e)))?;

            if !status.success() {
                return Err(failed(status.to_string()));
            }
        }

        Ok(HookOutcome::Ran(hooks.len()))
    }
}
