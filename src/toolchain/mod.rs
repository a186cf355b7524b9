//! External `emberc` toolchain invocation.
//!
//! The single process-execution interface of the crate: builds the argv
//! for a subcommand, spawns the executable, and returns its exit code and
//! captured output. All platform branching lives here; the analysis
//! engine in [`crate::ide`] never calls this module.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Default executable name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "emberc";

/// A subcommand of the `emberc` toolchain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolCommand {
    /// Compile a source file.
    Build,
    /// Compile and flash a source file onto the board.
    Upload,
    /// Compile and run a source file in the simulator.
    Run,
    /// Report the toolchain version.
    Version,
}

impl ToolCommand {
    /// The subcommand's argv token.
    pub fn arg(&self) -> &'static str {
        match self {
            ToolCommand::Build => "build",
            ToolCommand::Upload => "upload",
            ToolCommand::Run => "run",
            ToolCommand::Version => "--version",
        }
    }
}

/// Captured result of a finished toolchain process.
///
/// A nonzero exit code is data, not an error: compile failures surface
/// through [`ToolOutput::success`] and `stderr`, never as [`ToolError`].
#[derive(Clone, Debug)]
pub struct ToolOutput {
    /// Process exit code; -1 when the process was terminated by a signal.
    pub exit_code: i32,
    /// Captured standard output (lossily decoded).
    pub stdout: String,
    /// Captured standard error (lossily decoded).
    pub stderr: String,
}

impl ToolOutput {
    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawn-level toolchain failure.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("toolchain executable `{}` not found", program.display())]
    NotFound { program: PathBuf },
    #[error("failed to spawn `{}`", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle to the external toolchain executable.
#[derive(Clone, Debug)]
pub struct Toolchain {
    program: PathBuf,
}

impl Toolchain {
    /// Use a specific executable path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use the default executable name, resolved through `PATH`.
    pub fn discover() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }

    /// The configured executable path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Compile `file`, running in `cwd`.
    pub fn build(&self, file: &Path, cwd: &Path) -> Result<ToolOutput, ToolError> {
        self.invoke(ToolCommand::Build, Some(file), Some(cwd))
    }

    /// Compile and flash `file` onto the board, running in `cwd`.
    pub fn upload(&self, file: &Path, cwd: &Path) -> Result<ToolOutput, ToolError> {
        self.invoke(ToolCommand::Upload, Some(file), Some(cwd))
    }

    /// Compile and run `file` in the simulator, running in `cwd`.
    pub fn run(&self, file: &Path, cwd: &Path) -> Result<ToolOutput, ToolError> {
        self.invoke(ToolCommand::Run, Some(file), Some(cwd))
    }

    /// Query the toolchain version.
    pub fn version(&self) -> Result<ToolOutput, ToolError> {
        self.invoke(ToolCommand::Version, None, None)
    }

    fn invoke(
        &self,
        command: ToolCommand,
        file: Option<&Path>,
        cwd: Option<&Path>,
    ) -> Result<ToolOutput, ToolError> {
        let mut process = self.base_command();
        process.arg(command.arg());
        if let Some(file) = file {
            process.arg(file);
        }
        if let Some(cwd) = cwd {
            process.current_dir(cwd);
        }

        tracing::debug!(
            "[TOOLCHAIN] Invoking '{}' {}",
            self.program.display(),
            command.arg()
        );

        let output = process.output().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ToolError::NotFound {
                    program: self.program.clone(),
                }
            } else {
                ToolError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            }
        })?;

        Ok(ToolOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    // The toolchain ships as a `.cmd` shim on Windows, which plain
    // CreateProcess cannot start, so the invocation routes through the
    // shell there.
    #[cfg(windows)]
    fn base_command(&self) -> Command {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(&self.program);
        command
    }

    #[cfg(not(windows))]
    fn base_command(&self) -> Command {
        Command::new(&self.program)
    }
}
