//! CLI error types.

use inlay_assets::AssetError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Asset(#[from] AssetError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
