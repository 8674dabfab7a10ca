//! Listing Client
//!
//! Single entry point for folder listings. Routes each request either to a
//! live `FolderSource` or to the offline mock resolver, normalizes entries
//! into `Item`s and classifies failures into `ListingError`.

use crate::error::{ApiError, ListingError, SourceError};
use crate::provider::{
    Backend, BackendConfig, DropboxSource, FolderSource, ListFolderResponse, MockResolver,
};
use crate::types::Item;
use std::sync::Arc;
use tracing::{debug, info, warn};

enum Route {
    Mock(MockResolver),
    Live(Arc<dyn FolderSource>),
}

/// Performs (or mocks) the folder-listing call. Holds no mutable state.
pub struct ListingClient {
    route: Route,
}

impl ListingClient {
    /// Client answering every request from the mock table.
    pub fn mock() -> Self {
        Self {
            route: Route::Mock(MockResolver::new()),
        }
    }

    /// Client backed by a live folder source.
    pub fn live(source: Arc<dyn FolderSource>) -> Self {
        Self {
            route: Route::Live(source),
        }
    }

    /// Build the client the configuration asks for.
    pub fn from_config(config: &BackendConfig) -> Result<Self, ApiError> {
        match config.to_backend()? {
            Backend::Mock => {
                info!("Listing backend: mock");
                Ok(Self::mock())
            }
            Backend::Dropbox {
                access_token,
                endpoint,
                timeout,
            } => {
                info!(endpoint = %endpoint, "Listing backend: dropbox");
                let source = DropboxSource::new(access_token, Some(endpoint), timeout)?;
                Ok(Self::live(Arc::new(source)))
            }
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.route, Route::Mock(_))
    }

    pub fn backend_name(&self) -> &'static str {
        match &self.route {
            Route::Mock(_) => "mock",
            Route::Live(source) => source.name(),
        }
    }

    /// List the folder at `path` (`""` for the root, otherwise `/`-prefixed).
    ///
    /// A successful result is never empty.
    pub async fn list(&self, path: &str) -> Result<Vec<Item>, ListingError> {
        match &self.route {
            Route::Mock(resolver) => {
                let items = resolver.resolve(path);
                debug!(path = %path, count = items.len(), "Resolved mock listing");
                Ok(items)
            }
            Route::Live(source) => {
                debug!(path = %path, source = source.name(), "Listing folder");
                let result = classify(source.list_folder(path).await);
                match &result {
                    Ok(items) => info!(path = %path, count = items.len(), "Listed folder"),
                    Err(e) => warn!(path = %path, error = e.kind(), "Folder listing failed"),
                }
                result
            }
        }
    }
}

/// Map a raw source result onto the listing outcome.
pub(crate) fn classify(
    result: Result<Option<ListFolderResponse>, SourceError>,
) -> Result<Vec<Item>, ListingError> {
    let response = match result {
        Ok(Some(response)) => response,
        Ok(None) => return Err(ListingError::NoData),
        Err(SourceError::Decode(detail)) => {
            warn!(detail = %detail, "Malformed listing response");
            return Err(ListingError::BadResponse);
        }
        Err(e) => {
            warn!(error = %e, "Listing source error");
            return Err(ListingError::DropboxError);
        }
    };

    if response.has_more {
        debug!("Listing has more entries; continuation is not followed");
    }

    let mut items = Vec::with_capacity(response.entries.len());
    for entry in response.entries {
        match entry.into_item() {
            Some(item) => {
                debug!(item = %item.describe(), "Listing entry");
                items.push(item);
            }
            None => warn!("Skipping listing entry of unknown kind"),
        }
    }

    if items.is_empty() {
        return Err(ListingError::NoEntries);
    }

    Ok(items)
}
