//! Listing providers
//!
//! The `FolderSource` trait is the seam for the remote listing call. The
//! Dropbox implementation talks HTTP; the mock resolver answers offline.

pub mod dropbox;
pub mod entry;
pub mod mock;
pub mod profile;

use crate::error::SourceError;
use async_trait::async_trait;

pub use dropbox::DropboxSource;
pub use entry::{FileMetadata, FolderMetadata, ListFolderResponse, RemoteEntry};
pub use mock::MockResolver;
pub use profile::{Backend, BackendConfig};

/// A remote store that can list one folder per call.
///
/// `Ok(None)` means the call succeeded but carried no payload.
#[async_trait]
pub trait FolderSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn list_folder(&self, path: &str) -> Result<Option<ListFolderResponse>, SourceError>;
}
