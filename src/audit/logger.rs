use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::Utc;

use crate::git::Invocation;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only record of every git invocation made by the reporter
#[derive(Debug)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create an AuditLogger writing to the given path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Log one invocation and its outcome
    pub fn log_invocation(
        &self,
        args: &[&str],
        working_dir: &Path,
        invocation: &Invocation,
    ) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let command = args.join(" ");

        let log_entry = match invocation {
            Invocation::Completed(output) => format!(
                "[{}] [{}] [exit:{}] git {}\n",
                timestamp,
                working_dir.display(),
                output.exit_code,
                command
            ),
            Invocation::LaunchFailure { message } => format!(
                "[{}] [{}] [launch-failed] git {} :: {}\n",
                timestamp,
                working_dir.display(),
                command,
                message
            ),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(log_entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            fs::rename(&self.log_path, self.backup_path())?;
        }

        Ok(())
    }

    /// `history.log` -> `history.log.1`, `audit.txt` -> `audit.txt.1`
    fn backup_path(&self) -> PathBuf {
        let mut name = self.log_path.clone().into_os_string();
        name.push(".1");
        PathBuf::from(name)
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
