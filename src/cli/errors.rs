use std::path::PathBuf;

use thiserror::Error;

use super::exit_codes;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{} does not exist. Exiting.", .path.display())]
    MissingFile { path: PathBuf },

    #[error("{url} url is in invalid format. Use --url <url> without spaces. Exiting.")]
    InvalidUrl { url: String },

    #[error("No file or url specified, exit.")]
    NoSource,

    #[error(transparent)]
    Check(#[from] domcheck::Error),
}

impl AppError {
    /// Input problems detected before any document is loaded. These are
    /// reported on stdout; everything else goes to stderr.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFile { .. } | AppError::InvalidUrl { .. } | AppError::NoSource
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Check(e) if e.is_network() => exit_codes::NETWORK,
            _ => exit_codes::INVALID,
        }
    }
}
