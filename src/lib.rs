pub mod audit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, AppResult};
pub use git::{CommandOutput, GitExecutor, GitRunner, Invocation};
pub use report::{Reporter, Section};

use audit::AuditLogger;
use std::io::Write;

/// Build the git executor described by the configuration
///
/// An unusable working directory is left for each invocation to report, and
/// an audit log that cannot be opened only produces a warning.
pub fn executor_from_config(config: &Config) -> GitExecutor {
    let executor =
        GitExecutor::new(config.working_dir()).with_program(config.git.program.clone());

    let log_path = match config.audit_log_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: audit log disabled: {}", e);
            None
        }
    };

    match log_path.map(AuditLogger::with_path) {
        Some(Ok(logger)) => executor.with_audit(logger),
        Some(Err(e)) => {
            eprintln!("Warning: audit log disabled: {}", e);
            executor
        }
        None => executor,
    }
}

/// Produce the full status report for the configured repository
pub fn run<W: Write>(config: &Config, out: &mut W) -> AppResult<()> {
    let executor = executor_from_config(config);
    Reporter::new(executor).run(out)?;
    Ok(())
}
