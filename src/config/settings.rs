use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::git::DEFAULT_PROGRAM;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Optional settings read from `~/.config/repostat/config.toml`
///
/// Every field has a default, so a missing file and an empty file behave the
/// same: run `git` in the current directory with auditing off.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub git: GitConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GitConfig {
    pub program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            working_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AuditConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("repostat"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    /// when there is no home directory or no config file
    pub fn load() -> Result<Self, ConfigError> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(ConfigError::DirectoryNotFound) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.git.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "git.program must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Directory every git invocation runs in
    ///
    /// Not checked here: a missing or deleted directory surfaces as an error
    /// line in each report section. When the current directory cannot be
    /// resolved, `.` is used so git reports the problem itself.
    pub fn working_dir(&self) -> PathBuf {
        match &self.git.working_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Where audit lines go, or `None` when auditing is off
    pub fn audit_log_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        if !self.audit.enabled {
            return Ok(None);
        }

        match &self.audit.log_path {
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Some(Self::config_dir()?.join("history.log"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.git.program, "git");
        assert!(config.git.working_dir.is_none());
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_parse_empty_file() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse("[audit]\nenabled = true\n").unwrap();
        assert_eq!(config.git.program, "git");
        assert!(config.audit.enabled);
        assert!(config.audit.log_path.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let contents = format!(
            "[git]\nprogram = \"/usr/bin/git\"\nworking_dir = {:?}\n\n[audit]\nenabled = true\nlog_path = \"/tmp/repostat.log\"\n",
            temp_dir.path().display().to_string()
        );

        let config = Config::parse(&contents).unwrap();
        assert_eq!(config.git.program, "/usr/bin/git");
        assert_eq!(config.working_dir(), temp_dir.path());
        assert_eq!(
            config.audit_log_path().unwrap(),
            Some(PathBuf::from("/tmp/repostat.log"))
        );
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("[git\nprogram = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_empty_program() {
        let result = Config::parse("[git]\nprogram = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_missing_working_dir_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let contents = format!("[git]\nworking_dir = {:?}\n", missing.display().to_string());

        let config = Config::parse(&contents).unwrap();
        assert_eq!(config.working_dir(), missing);
    }

    #[test]
    fn test_working_dir_defaults_to_current_dir() {
        let config = Config::default();
        assert_eq!(config.working_dir(), env::current_dir().unwrap());
    }

    #[test]
    fn test_audit_disabled_has_no_path() {
        let mut config = Config::default();
        config.audit.log_path = Some(PathBuf::from("/tmp/ignored.log"));
        assert_eq!(config.audit_log_path().unwrap(), None);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[git]\nprogram = \"git\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.git.program, "git");
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from(temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut config = Config::default();
        config.audit.enabled = true;

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
