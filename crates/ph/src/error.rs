//! CLI error types.

use ph_config::ConfigError;
use ph_nav::ConfigurationError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Navigation(#[from] ConfigurationError),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadSidebars {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Serialize(String),

    #[error("{0} document reference(s) could not be resolved")]
    UnresolvedReferences(usize),

    #[error("{0}")]
    Validation(String),
}
