//! Dropbox HTTP folder source.

use crate::error::{ApiError, SourceError};
use crate::provider::entry::ListFolderResponse;
use crate::provider::FolderSource;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.dropboxapi.com/2";

#[derive(Serialize)]
struct ListFolderArg<'a> {
    path: &'a str,
}

/// Lists folders through the Dropbox v2 `files/list_folder` RPC.
pub struct DropboxSource {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl DropboxSource {
    pub fn new(
        access_token: String,
        endpoint: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        if access_token.trim().is_empty() {
            return Err(ApiError::ProviderNotConfigured(
                "dropbox source requires an access token".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            access_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn list_folder_url(&self) -> String {
        format!("{}/files/list_folder", self.endpoint.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for DropboxSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropboxSource")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Decode a `list_folder` response body. An empty body carries no payload.
pub fn decode_list_folder(body: &str) -> Result<Option<ListFolderResponse>, SourceError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| SourceError::Decode(e.to_string()))
}

/// Interpret a `list_folder` reply: any non-2xx status is an error.
fn read_list_folder(
    status: u16,
    body: String,
) -> Result<Option<ListFolderResponse>, SourceError> {
    if !(200..300).contains(&status) {
        return Err(SourceError::Status { status, body });
    }
    decode_list_folder(&body)
}

#[async_trait]
impl FolderSource for DropboxSource {
    fn name(&self) -> &'static str {
        "dropbox"
    }

    async fn list_folder(&self, path: &str) -> Result<Option<ListFolderResponse>, SourceError> {
        let url = self.list_folder_url();
        debug!(url = %url, path = %path, "Sending list_folder request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&ListFolderArg { path })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        read_list_folder(status.as_u16(), body)
    }
}
