//! Error types for listing, provider access and the ambient tooling layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure kinds a folder listing can end in.
///
/// Every failed `load()` is reported as exactly one of these. The `Display`
/// text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ListingError {
    /// Baseline value; never produced by a failed request.
    #[error("No error.")]
    NoError,
    #[error("Dropbox error. You may need to renew the access token.")]
    DropboxError,
    #[error("Invalid Dropbox path.")]
    BadPath,
    #[error("Dropbox supplied an invalid authentication code.")]
    BadAuthenticationCode,
    #[error("Dropbox returned an invalid response.")]
    BadResponse,
    #[error("Dropbox returned no data.")]
    NoData,
    #[error("Dropbox folder contains no entries.")]
    NoEntries,
    #[error("Request for Dropbox access token failed.")]
    CantGetToken,
    #[error("Dropbox user is not authenticated.")]
    UserNotAuthenticated,
}

impl ListingError {
    /// Stable machine-readable name, used in structured logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ListingError::NoError => "no_error",
            ListingError::DropboxError => "dropbox_error",
            ListingError::BadPath => "bad_path",
            ListingError::BadAuthenticationCode => "bad_authentication_code",
            ListingError::BadResponse => "bad_response",
            ListingError::NoData => "no_data",
            ListingError::NoEntries => "no_entries",
            ListingError::CantGetToken => "cant_get_token",
            ListingError::UserNotAuthenticated => "user_not_authenticated",
        }
    }
}

/// Failure reported by a `FolderSource` before classification.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}

/// Errors from configuration, logging setup and the CLI layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("{0}")]
    Listing(#[from] ListingError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
