use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the command before it can do its job.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseConfig(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Token(#[from] signed_token::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
