//! CLI error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use plinth_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Process { command: String, status: ExitStatus },

    #[error("no providers list found in {}", .0.display())]
    Patch(PathBuf),
}
