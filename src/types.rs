//! Core value types shared by the listing client and folder states.

use serde::{Deserialize, Serialize};

/// One entry in a folder listing: either a file or a folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Provider-assigned identity. Not guaranteed unique across mock data.
    pub id: String,
    pub name: String,
    /// Fully-qualified provider path; empty for the mock fallback entry.
    pub path: String,
    /// Byte size; 0 for folders.
    pub size: u64,
    pub is_file: bool,
}

impl Item {
    /// Build an item, mapping a missing provider path to an empty string.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: Option<String>,
        size: u64,
        is_file: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.unwrap_or_default(),
            size,
            is_file,
        }
    }

    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        path: Option<String>,
        size: u64,
    ) -> Self {
        Self::new(id, name, path, size, true)
    }

    pub fn folder(id: impl Into<String>, name: impl Into<String>, path: Option<String>) -> Self {
        Self::new(id, name, path, 0, false)
    }

    pub fn is_folder(&self) -> bool {
        !self.is_file
    }

    /// Single-line rendering used in debug logs.
    pub fn describe(&self) -> String {
        format!(
            "{}, name: {}, path: {}, size: {}, isFile: {}",
            self.id, self.name, self.path, self.size, self.is_file
        )
    }
}

/// Lifecycle phase of a folder view. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Loaded => "loaded",
            Phase::Failed => "failed",
        }
    }
}
