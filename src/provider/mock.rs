//! Deterministic offline listing data.

use crate::types::Item;

/// Fixed mapping from known paths to folder contents.
///
/// Used when no live backend is available. The output is a pure function of
/// the path; unknown paths yield a single nameless folder entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResolver;

impl MockResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, path: &str) -> Vec<Item> {
        match path {
            "" => vec![
                folder("0", "Backups", "/Backups"),
                folder("1", "Sites", "/Sites"),
                folder("2", "Notes", "/Notes"),
                folder("3", "Documents", "/Documents"),
            ],
            "/Documents" => vec![
                folder("4", "Pages", "/Documents/Pages"),
                folder("5", "Numbers", "/Documents/Numbers"),
                folder("6", "Keynote", "/Documents/Keynote"),
                folder("7", "Invoices", "/Documents/Invoices"),
            ],
            "/Documents/Invoices" => vec![
                file("9", "invoice1.docx", "/Documents/Invoices/invoice1.docx", 10),
                // Duplicate id is part of the sample data.
                file("10", "invoice2.docx", "/Documents/Invoices/invoice2.docx", 11),
                file("10", "invoice3.docx", "/Documents/Invoices/invoice3.docx", 12),
            ],
            _ => vec![Item::new("12", "", None, 0, false)],
        }
    }
}

fn folder(id: &str, name: &str, path: &str) -> Item {
    Item::folder(id, name, Some(path.to_string()))
}

fn file(id: &str, name: &str, path: &str, size: u64) -> Item {
    Item::file(id, name, Some(path.to_string()), size)
}
