//! Folder State
//!
//! Per-view lifecycle of one folder listing: `Idle → Loading → Loaded | Failed`,
//! re-enterable through `load()`. Every transition is published as a
//! `FolderSnapshot` on a watch channel so a presentation layer can re-render.
//!
//! Items from the previous successful load stay visible while a reload is in
//! flight and after a failed reload.

use crate::error::ListingError;
use crate::listing::ListingClient;
use crate::types::{Item, Phase};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Immutable copy of a folder state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSnapshot {
    pub path: Option<String>,
    pub phase: Phase,
    pub items: Vec<Item>,
    /// Set only when `phase` is `Failed`.
    pub error: Option<ListingError>,
}

/// A listing request detached from its folder state.
///
/// Produced by [`FolderState::begin_load`]; run it anywhere and hand the
/// outcome back to [`FolderState::finish_load`].
pub struct LoadRequest {
    generation: u64,
    path: String,
    client: Arc<ListingClient>,
}

impl LoadRequest {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn run(self) -> LoadOutcome {
        let result = self.client.list(&self.path).await;
        LoadOutcome {
            generation: self.generation,
            path: self.path,
            result,
        }
    }
}

/// Result of a [`LoadRequest`], tagged with the request it answers.
#[derive(Debug)]
pub struct LoadOutcome {
    generation: u64,
    path: String,
    result: Result<Vec<Item>, ListingError>,
}

impl LoadOutcome {
    /// Folder path the request listed.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn result(&self) -> &Result<Vec<Item>, ListingError> {
        &self.result
    }
}

pub struct FolderState {
    client: Arc<ListingClient>,
    path: Option<String>,
    phase: Phase,
    items: Vec<Item>,
    error: Option<ListingError>,
    generation: u64,
    observers: watch::Sender<FolderSnapshot>,
}

impl FolderState {
    /// Create a state with no path assigned.
    pub fn new(client: Arc<ListingClient>) -> Self {
        Self::build(client, None)
    }

    pub fn with_path(client: Arc<ListingClient>, path: impl Into<String>) -> Self {
        Self::build(client, Some(path.into()))
    }

    fn build(client: Arc<ListingClient>, path: Option<String>) -> Self {
        let (observers, _) = watch::channel(FolderSnapshot {
            path: path.clone(),
            phase: Phase::Idle,
            items: Vec::new(),
            error: None,
        });
        Self {
            client,
            path,
            phase: Phase::Idle,
            items: Vec::new(),
            error: None,
            generation: 0,
            observers,
        }
    }

    /// Assign the folder path. Does not start a request.
    ///
    /// A request still in flight for a different path no longer applies;
    /// the state stays `Loading` until the next load.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
        self.publish();
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Items from the most recent successful load.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_content(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn error(&self) -> Option<ListingError> {
        self.error
    }

    /// The current error kind, `NoError` outside `Failed`.
    pub fn error_condition(&self) -> ListingError {
        self.error.unwrap_or(ListingError::NoError)
    }

    pub fn snapshot(&self) -> FolderSnapshot {
        FolderSnapshot {
            path: self.path.clone(),
            phase: self.phase,
            items: self.items.clone(),
            error: self.error,
        }
    }

    /// Receiver that sees a new snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<FolderSnapshot> {
        self.observers.subscribe()
    }

    /// Fetch the folder contents.
    ///
    /// Fails with `BadPath` and sends no request when no path is assigned.
    /// Any other failure leaves the state in `Failed` and is also returned.
    pub async fn load(&mut self) -> Result<(), ListingError> {
        let request = self.begin_load()?;
        let outcome = request.run().await;
        self.finish_load(outcome)
    }

    /// Enter `Loading` and hand out the request to run.
    ///
    /// Each call supersedes requests issued earlier; their outcomes are
    /// discarded by `finish_load`.
    pub fn begin_load(&mut self) -> Result<LoadRequest, ListingError> {
        let Some(path) = self.path.clone() else {
            warn!("load() called before a folder path was assigned");
            return Err(ListingError::BadPath);
        };

        self.generation += 1;
        self.phase = Phase::Loading;
        self.error = None;
        self.publish();
        debug!(path = %path, generation = self.generation, "Loading folder");

        Ok(LoadRequest {
            generation: self.generation,
            path,
            client: Arc::clone(&self.client),
        })
    }

    /// Apply a finished request.
    ///
    /// Returns the request's own result. Outcomes of superseded requests
    /// change nothing.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> Result<(), ListingError> {
        if !self.is_current(&outcome) {
            debug!(
                path = %outcome.path,
                generation = outcome.generation,
                current = self.generation,
                "Discarding superseded listing result"
            );
            return outcome.result.map(|_| ());
        }

        let result = match outcome.result {
            Ok(items) => {
                self.phase = Phase::Loaded;
                self.items = items;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.phase = Phase::Failed;
                self.error = Some(err);
                Err(err)
            }
        };
        self.publish();
        result
    }

    /// Whether `outcome` answers the latest request issued by this state
    /// for the path it holds now.
    pub fn is_current(&self, outcome: &LoadOutcome) -> bool {
        outcome.generation == self.generation
            && self.phase == Phase::Loading
            && self.path.as_deref() == Some(outcome.path.as_str())
    }

    /// New, unloaded state for a sub-folder of this one.
    ///
    /// Fails with `BadPath` when `item` is a file or has no name, or when
    /// this state has no path.
    pub fn child(&self, item: &Item) -> Result<FolderState, ListingError> {
        if item.is_file || item.name.is_empty() {
            return Err(ListingError::BadPath);
        }
        let parent = self.path.as_deref().ok_or(ListingError::BadPath)?;
        let path = format!("{}/{}", parent, item.name);
        Ok(FolderState::with_path(Arc::clone(&self.client), path))
    }

    fn publish(&self) {
        self.observers.send_replace(self.snapshot());
    }
}

impl std::fmt::Debug for FolderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderState")
            .field("path", &self.path)
            .field("phase", &self.phase)
            .field("items", &self.items.len())
            .field("error", &self.error)
            .field("generation", &self.generation)
            .finish()
    }
}
