//! Wire-level listing entries and their mapping onto `Item`.

use crate::types::Item;
use serde::{Deserialize, Serialize};

/// Metadata for a file entry as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    #[serde(default)]
    pub size: u64,
}

/// Metadata for a folder entry as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderMetadata {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

/// A listing entry classified by its `.tag` discriminator.
///
/// Anything that is neither a file nor a folder (deleted markers, tags added
/// by newer API versions) decodes as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub enum RemoteEntry {
    File(FileMetadata),
    Folder(FolderMetadata),
    #[serde(other)]
    Unknown,
}

impl RemoteEntry {
    pub fn into_item(self) -> Option<Item> {
        match self {
            RemoteEntry::File(meta) => Some(Item::file(
                meta.id,
                meta.name,
                meta.path_display,
                meta.size,
            )),
            RemoteEntry::Folder(meta) => Some(Item::folder(meta.id, meta.name, meta.path_display)),
            RemoteEntry::Unknown => None,
        }
    }
}

/// Payload of a successful `list_folder` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderResponse {
    #[serde(default)]
    pub entries: Vec<RemoteEntry>,
    #[serde(default)]
    pub has_more: bool,
}
