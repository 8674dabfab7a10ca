use std::sync::Arc;

use files_explorer::tooling::cli::{Commands, OutputFormat};
use files_explorer::tooling::CliContext;
use files_explorer::{ApiError, ListingClient, ListingError};

use crate::integration::support::{file_entry, ScriptedSource};

fn mock_context() -> CliContext {
    CliContext::with_client(Arc::new(ListingClient::mock()), false).unwrap()
}

#[test]
fn ls_json_reports_loaded_snapshot() {
    let output = mock_context()
        .execute(&Commands::Ls {
            path: "/".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["path"], "");
    assert_eq!(value["phase"], "loaded");
    assert_eq!(value["items"].as_array().unwrap().len(), 4);
    assert!(value["error"].is_null());
}

#[test]
fn ls_text_renders_folder_table() {
    let output = mock_context()
        .execute(&Commands::Ls {
            path: "Documents".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();

    assert!(output.starts_with("/Documents\n"));
    for name in ["Pages/", "Numbers/", "Keynote/", "Invoices/"] {
        assert!(output.contains(name), "missing {} in:\n{}", name, output);
    }
}

#[test]
fn tree_descends_into_sub_folders() {
    let output = mock_context()
        .execute(&Commands::Tree {
            path: String::new(),
            depth: 3,
        })
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "/ (root)");
    assert!(lines.contains(&"Documents/"));
    assert!(lines.contains(&"  Invoices/"));
    assert!(lines.contains(&"    invoice1.docx (10 bytes)"));
    assert!(lines.contains(&"    invoice3.docx (12 bytes)"));

    let documents = lines.iter().position(|l| *l == "Documents/").unwrap();
    let invoices = lines.iter().position(|l| *l == "  Invoices/").unwrap();
    assert!(documents < invoices);
}

#[test]
fn tree_depth_zero_lists_only_the_start_folder() {
    let output = mock_context()
        .execute(&Commands::Tree {
            path: "/Documents".to_string(),
            depth: 0,
        })
        .unwrap();

    assert_eq!(
        output,
        "/Documents\nPages/\nNumbers/\nKeynote/\nInvoices/"
    );
}

#[test]
fn stat_shows_file_details() {
    let output = mock_context()
        .execute(&Commands::Stat {
            path: "/Documents/Invoices/invoice2.docx".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();

    assert!(output.starts_with("File Details"));
    assert!(output.contains("/Documents/Invoices/invoice2.docx"));
    assert!(output.contains("11 bytes"));
}

#[test]
fn stat_unknown_entry_is_not_found() {
    let err = mock_context()
        .execute(&Commands::Stat {
            path: "/Documents/Invoices/missing.docx".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(path) if path == "/Documents/Invoices/missing.docx"));
}

#[test]
fn listing_failures_surface_their_message() {
    let source = Arc::new(ScriptedSource::new().folder(
        "/Reports",
        vec![file_entry("id:1", "q1.xlsx", "/Reports/q1.xlsx", 2048)],
    ));
    let context = CliContext::with_client(Arc::new(ListingClient::live(source)), false).unwrap();

    let err = context
        .execute(&Commands::Ls {
            path: "/Elsewhere".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Listing(ListingError::DropboxError)));
    assert_eq!(
        err.to_string(),
        "Dropbox error. You may need to renew the access token."
    );

    let output = context
        .execute(&Commands::Ls {
            path: "/Reports".to_string(),
            format: OutputFormat::Text,
        })
        .unwrap();
    assert!(output.contains("q1.xlsx"));
    assert!(output.contains("2048 bytes"));
}
