//! Text rendering for folder listings, trees and file details.

use crate::error::ListingError;
use crate::folder::FolderSnapshot;
use crate::types::{Item, Phase};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

/// Title shown above a listing; the root has an empty path.
pub fn folder_title(path: &str) -> String {
    if path.is_empty() {
        "/ (root)".to_string()
    } else {
        path.to_string()
    }
}

/// One-line status for a snapshot, used as the progress indicator.
pub fn phase_line(snapshot: &FolderSnapshot) -> String {
    let title = folder_title(snapshot.path.as_deref().unwrap_or_default());
    match snapshot.phase {
        Phase::Idle => format!("{} (not loaded)", title),
        Phase::Loading => format!("Getting data for {}...", title),
        Phase::Loaded => format!("{} ({} entries)", title, snapshot.items.len()),
        Phase::Failed => format!(
            "{}: {}",
            title,
            snapshot.error.unwrap_or(ListingError::NoError)
        ),
    }
}

pub fn format_listing_table(path: &str, items: &[Item]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Type", "Name", "Size", "Path"]);

    for item in items {
        let kind = if item.is_file {
            Cell::new("file")
        } else {
            Cell::new("dir").fg(Color::Blue)
        };
        let name = if item.is_file {
            Cell::new(&item.name)
        } else {
            Cell::new(format!("{}/", item.name)).fg(Color::Blue)
        };
        let size = if item.is_file {
            format!("{} bytes", item.size)
        } else {
            "-".to_string()
        };
        table.add_row(vec![kind, name, Cell::new(size), Cell::new(&item.path)]);
    }

    format!("{}\n{}", folder_title(path), table)
}

/// A single line of a tree rendering.
pub fn format_tree_line(depth: usize, item: &Item, color: bool) -> String {
    let indent = "  ".repeat(depth);
    if item.is_file {
        format!("{}{} ({} bytes)", indent, item.name, item.size)
    } else if color {
        format!("{}{}", indent, format!("{}/", item.name).blue())
    } else {
        format!("{}{}/", indent, item.name)
    }
}

pub fn format_tree_error(depth: usize, error: ListingError, color: bool) -> String {
    let indent = "  ".repeat(depth);
    if color {
        format!("{}{}", indent, format!("[{}]", error).red())
    } else {
        format!("{}[{}]", indent, error)
    }
}

pub fn format_file_details(item: &Item) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.add_row(vec!["Name", item.name.as_str()]);
    table.add_row(vec!["Path", item.path.as_str()]);
    table.add_row(vec!["Size".to_string(), format!("{} bytes", item.size)]);
    table.add_row(vec!["Id", item.id.as_str()]);
    table.add_row(vec!["Type", if item.is_file { "file" } else { "folder" }]);
    format!("File Details\n{}", table)
}
