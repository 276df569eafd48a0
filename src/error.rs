//! Error types for ado-npmrc

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving inputs or writing credentials
#[derive(Error, Debug)]
pub enum Error {
    /// Token does not have the shape of an Azure DevOps PAT
    #[error(
        "the personal access token is invalid: expected 52 or more letters and digits. \
         It may have been corrupted or copied incorrectly"
    )]
    InvalidToken,

    /// URL matches neither feed URL template
    #[error(
        "invalid feed URL: {url}\n\
         expected https://pkgs.dev.azure.com/{{organization}}/_packaging/{{feed}}/npm/registry/\n\
         or https://pkgs.dev.azure.com/{{organization}}/{{project}}/_packaging/{{feed}}/npm/registry/"
    )]
    InvalidFeedUrl {
        /// The rejected input, verbatim
        url: String,
    },

    /// Project configuration file does not exist
    #[error("project configuration file not found: {}", .0.display())]
    ProjectConfigNotFound(PathBuf),

    /// Project configuration file exists but could not be read
    #[error("failed to read project configuration file {}", .path.display())]
    ProjectConfigRead {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Project configuration file contains no Azure DevOps feed
    #[error(
        "no Azure DevOps feed URLs found in {}. Pass one or more feeds with --url",
        .0.display()
    )]
    NoFeedsFound(PathBuf),

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
