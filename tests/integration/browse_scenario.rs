use std::sync::Arc;

use files_explorer::provider::RemoteEntry;
use files_explorer::{FolderState, ListingClient, ListingError, Phase};

use crate::integration::support::{file_entry, folder_entry, ScriptedSource};

#[tokio::test]
async fn mock_root_to_invoices_walkthrough() {
    let client = Arc::new(ListingClient::mock());

    let mut root = FolderState::with_path(client, "");
    root.load().await.unwrap();
    assert_eq!(root.phase(), Phase::Loaded);
    assert_eq!(root.items().len(), 4);
    let names: Vec<&str> = root.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Backups", "Sites", "Notes", "Documents"]);

    let documents = root.items()[3].clone();
    let mut documents = root.child(&documents).unwrap();
    assert_eq!(documents.path(), Some("/Documents"));
    documents.load().await.unwrap();
    assert_eq!(documents.items().len(), 4);

    let invoices = documents
        .items()
        .iter()
        .find(|item| item.name == "Invoices")
        .cloned()
        .unwrap();
    let mut invoices = documents.child(&invoices).unwrap();
    assert_eq!(invoices.path(), Some("/Documents/Invoices"));
    invoices.load().await.unwrap();

    let sizes: Vec<u64> = invoices.items().iter().map(|i| i.size).collect();
    assert_eq!(sizes, vec![10, 11, 12]);
    assert!(invoices.items().iter().all(|item| item.is_file));
}

#[tokio::test]
async fn child_state_changes_do_not_touch_parent() {
    let source = Arc::new(
        ScriptedSource::new()
            .folder("", vec![folder_entry("id:1", "Photos", "/Photos")])
            .folder("/Photos", vec![RemoteEntry::Unknown]),
    );
    let client = Arc::new(ListingClient::live(source.clone()));

    let mut parent = FolderState::with_path(client, "");
    parent.load().await.unwrap();
    let before = parent.snapshot();

    let photos = parent.items()[0].clone();
    let mut child = parent.child(&photos).unwrap();
    assert_eq!(child.load().await, Err(ListingError::NoEntries));
    assert_eq!(child.phase(), Phase::Failed);

    assert_eq!(parent.snapshot(), before);
    assert_eq!(parent.phase(), Phase::Loaded);
    assert_eq!(parent.error(), None);
    assert_eq!(source.requests(), vec!["".to_string(), "/Photos".to_string()]);
}

#[tokio::test]
async fn live_listing_keeps_items_across_failed_refresh() {
    let source = Arc::new(ScriptedSource::new().folder(
        "/Work",
        vec![
            file_entry("id:1", "plan.md", "/Work/plan.md", 120),
            RemoteEntry::Unknown,
            folder_entry("id:2", "Drafts", "/Work/Drafts"),
        ],
    ));
    let client = Arc::new(ListingClient::live(source.clone()));

    let mut state = FolderState::with_path(client.clone(), "/Work");
    state.load().await.unwrap();
    assert_eq!(state.items().len(), 2);
    let loaded = state.items().to_vec();

    state.set_path("/Gone");
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(state.load().await, Err(ListingError::DropboxError));
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_condition(), ListingError::DropboxError);
    assert_eq!(state.items(), loaded.as_slice());
}

#[tokio::test]
async fn detached_requests_resolve_last_issued_wins() {
    let client = Arc::new(ListingClient::mock());
    let mut state = FolderState::with_path(client, "");

    let first = state.begin_load().unwrap();
    state.set_path("/Documents");
    let second = state.begin_load().unwrap();
    assert_eq!(second.path(), "/Documents");

    // Both run on other tasks; the older one finishes last.
    let second = tokio::spawn(second.run()).await.unwrap();
    let first = tokio::spawn(first.run()).await.unwrap();

    state.finish_load(second).unwrap();
    assert_eq!(state.phase(), Phase::Loaded);
    let documents = state.items().to_vec();

    state.finish_load(first).unwrap();
    assert_eq!(state.items(), documents.as_slice());
    assert_eq!(state.items()[0].name, "Pages");
}
