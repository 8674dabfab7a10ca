use async_trait::async_trait;
use files_explorer::error::SourceError;
use files_explorer::provider::{
    FileMetadata, FolderMetadata, FolderSource, ListFolderResponse, RemoteEntry,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory folder source that records every requested path.
pub struct ScriptedSource {
    folders: HashMap<String, Vec<RemoteEntry>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            folders: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn folder(mut self, path: &str, entries: Vec<RemoteEntry>) -> Self {
        self.folders.insert(path.to_string(), entries);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FolderSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn list_folder(&self, path: &str) -> Result<Option<ListFolderResponse>, SourceError> {
        self.requests.lock().unwrap().push(path.to_string());
        match self.folders.get(path) {
            Some(entries) => Ok(Some(ListFolderResponse {
                entries: entries.clone(),
                has_more: false,
            })),
            None => Err(SourceError::Status {
                status: 409,
                body: "path/not_found/".to_string(),
            }),
        }
    }
}

pub fn folder_entry(id: &str, name: &str, path: &str) -> RemoteEntry {
    RemoteEntry::Folder(FolderMetadata {
        id: id.to_string(),
        name: name.to_string(),
        path_display: Some(path.to_string()),
    })
}

pub fn file_entry(id: &str, name: &str, path: &str, size: u64) -> RemoteEntry {
    RemoteEntry::File(FileMetadata {
        id: id.to_string(),
        name: name.to_string(),
        path_display: Some(path.to_string()),
        size,
    })
}
