//! Files Explorer: remote folder listing client
//!
//! Lists folders of a remote cloud file store, normalizes entries into a
//! uniform `Item` model and tracks each folder view through a small state
//! machine that a presentation layer observes.

pub mod config;
pub mod error;
pub mod folder;
pub mod listing;
pub mod logging;
pub mod provider;
pub mod tooling;
pub mod types;

pub use error::{ApiError, ListingError};
pub use folder::{FolderSnapshot, FolderState, LoadOutcome, LoadRequest};
pub use listing::ListingClient;
pub use types::{Item, Phase};
