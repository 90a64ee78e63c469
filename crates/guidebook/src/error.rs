//! CLI error types.

use guidebook_config::ConfigError;
use guidebook_nav::NavigationError;
use guidebook_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Invalid navigation table: {0}")]
    Navigation(#[from] NavigationError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
