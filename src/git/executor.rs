use crate::audit::AuditLogger;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Program spawned when none is configured
pub const DEFAULT_PROGRAM: &str = "git";

/// Output of a git command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of one attempt to run git
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The process ran and exited (with any code)
    Completed(CommandOutput),
    /// The process could not be started at all
    LaunchFailure { message: String },
}

impl Invocation {
    /// Text describing the failure, or `None` when the command succeeded
    pub fn error_text(&self) -> Option<&str> {
        match self {
            Invocation::Completed(output) if output.success() => None,
            Invocation::Completed(output) => Some(&output.stderr),
            Invocation::LaunchFailure { message } => Some(message),
        }
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Invocation::Completed(output) => Some(output.exit_code),
            Invocation::LaunchFailure { .. } => None,
        }
    }
}

/// Anything that can run a git command and report its outcome
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Invocation;
}

impl<T: GitRunner + ?Sized> GitRunner for &T {
    fn run(&self, args: &[&str]) -> Invocation {
        (**self).run(args)
    }
}

/// Executes git commands in a fixed working directory
#[derive(Debug)]
pub struct GitExecutor {
    program: String,
    working_dir: PathBuf,
    audit: Option<AuditLogger>,
}

impl GitExecutor {
    /// Create a GitExecutor that runs `git` in the given directory
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            working_dir: working_dir.as_ref().to_path_buf(),
            audit: None,
        }
    }

    /// Use a different executable instead of `git`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Record every invocation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Run the program and fold spawn errors into `LaunchFailure`
    fn spawn(&self, args: &[&str]) -> Invocation {
        match Command::new(&self.program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
        {
            Ok(output) => Invocation::Completed(Self::process_output(output)),
            Err(e) => Invocation::LaunchFailure {
                message: format!("Failed to execute {}: {}", self.program, e),
            },
        }
    }

    fn process_output(output: Output) -> CommandOutput {
        CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Get the working directory commands run in
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl GitRunner for GitExecutor {
    fn run(&self, args: &[&str]) -> Invocation {
        let invocation = self.spawn(args);

        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_invocation(args, &self.working_dir, &invocation) {
                eprintln!("Warning: failed to write audit log: {}", e);
            }
        }

        invocation
    }
}
