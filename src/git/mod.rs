pub mod executor;

// Re-export commonly used types
pub use executor::{CommandOutput, DEFAULT_PROGRAM, GitExecutor, GitRunner, Invocation};
