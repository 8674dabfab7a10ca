//! CLI Tooling
//!
//! Command-line front end. Each command drives one or more `FolderState`s
//! against a shared `ListingClient` and renders the result.

use crate::config::ExplorerConfig;
use crate::error::{ApiError, ListingError};
use crate::folder::FolderState;
use crate::listing::ListingClient;
use crate::tooling::format::{
    folder_title, format_file_details, format_listing_table, format_tree_error, format_tree_line,
    phase_line,
};
use crate::types::Item;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Files Explorer - browse a remote cloud file store
#[derive(Parser)]
#[command(name = "files-explorer")]
#[command(about = "Browse a remote cloud file store by listing folders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the built-in mock data instead of the remote store
    #[arg(long, global = true)]
    pub mock: bool,

    /// Suppress progress output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file"); wins over EXPLORER_LOG_FILE
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut ExplorerConfig) {
        if self.mock {
            config.backend.use_mock = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the contents of one folder
    Ls {
        /// Folder path; empty or "/" for the root
        #[arg(default_value = "")]
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Recursively list a folder and its sub-folders
    Tree {
        /// Folder path; empty or "/" for the root
        #[arg(default_value = "")]
        path: String,
        /// Maximum folder depth to descend into
        #[arg(long, default_value = "3")]
        depth: usize,
    },
    /// Show details for a single file or folder entry
    Stat {
        /// Full path of the entry, e.g. /Documents/Invoices/invoice1.docx
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Normalize a user-supplied path to the provider form: `""` or `/a/b`.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        String::new()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Split a normalized entry path into its parent folder path and entry name.
pub fn split_entry_path(path: &str) -> Option<(String, String)> {
    let path = normalize_path(path);
    let (parent, name) = path.rsplit_once('/')?;
    if name.is_empty() {
        return None;
    }
    Some((parent.to_string(), name.to_string()))
}

/// CLI context: owns the runtime and the shared listing client.
pub struct CliContext {
    client: Arc<ListingClient>,
    runtime: tokio::runtime::Runtime,
    progress: bool,
    color: bool,
}

impl CliContext {
    /// Build the client from configuration; tree output is colored on a terminal.
    pub fn new(config: &ExplorerConfig, progress: bool) -> Result<Self, ApiError> {
        let client = Arc::new(ListingClient::from_config(&config.backend)?);
        let mut context = Self::with_client(client, progress)?;
        context.color = std::io::stdout().is_terminal();
        Ok(context)
    }

    /// Context around an already-built client, with plain output.
    pub fn with_client(client: Arc<ListingClient>, progress: bool) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;
        Ok(Self {
            client,
            runtime,
            progress,
            color: false,
        })
    }

    pub fn client(&self) -> &Arc<ListingClient> {
        &self.client
    }

    /// Run a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(backend = self.client.backend_name(), "Executing command");
        match command {
            Commands::Ls { path, format } => self.runtime.block_on(self.ls(path, *format)),
            Commands::Tree { path, depth } => self.runtime.block_on(self.tree(path, *depth)),
            Commands::Stat { path, format } => self.runtime.block_on(self.stat(path, *format)),
        }
    }

    async fn ls(&self, path: &str, format: OutputFormat) -> Result<String, ApiError> {
        let mut state = FolderState::with_path(Arc::clone(&self.client), normalize_path(path));
        self.load(&mut state).await?;

        match format {
            OutputFormat::Text => Ok(format_listing_table(
                state.path().unwrap_or_default(),
                state.items(),
            )),
            OutputFormat::Json => to_json(&state.snapshot()),
        }
    }

    /// Depth-first walk that opens a fresh `FolderState` for every folder.
    ///
    /// Items of the start folder are at depth 0; folders deeper than
    /// `max_depth` are shown but not opened. A failing sub-folder is reported
    /// inline and does not stop the walk.
    async fn tree(&self, path: &str, max_depth: usize) -> Result<String, ApiError> {
        let mut root = FolderState::with_path(Arc::clone(&self.client), normalize_path(path));
        self.load(&mut root).await?;

        let mut lines = vec![folder_title(root.path().unwrap_or_default())];
        let root = Arc::new(root);
        let mut stack: Vec<(Item, usize, Arc<FolderState>)> = root
            .items()
            .iter()
            .rev()
            .map(|item| (item.clone(), 0, Arc::clone(&root)))
            .collect();

        while let Some((item, depth, parent)) = stack.pop() {
            lines.push(format_tree_line(depth, &item, self.color));
            if item.is_file || depth >= max_depth {
                continue;
            }
            let Ok(mut child) = parent.child(&item) else {
                continue;
            };
            match self.load(&mut child).await {
                Ok(()) => {
                    let child = Arc::new(child);
                    for entry in child.items().iter().rev() {
                        stack.push((entry.clone(), depth + 1, Arc::clone(&child)));
                    }
                }
                Err(ApiError::Listing(err)) => {
                    lines.push(format_tree_error(depth + 1, err, self.color));
                }
                Err(other) => return Err(other),
            }
        }

        Ok(lines.join("\n"))
    }

    async fn stat(&self, path: &str, format: OutputFormat) -> Result<String, ApiError> {
        let (parent, name) = split_entry_path(path).ok_or(ListingError::BadPath)?;
        let mut state = FolderState::with_path(Arc::clone(&self.client), parent);
        self.load(&mut state).await?;

        let item = state
            .items()
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| ApiError::NotFound(normalize_path(path)))?;

        match format {
            OutputFormat::Text => Ok(format_file_details(item)),
            OutputFormat::Json => to_json(item),
        }
    }

    /// Load a folder, reporting the `Loading` phase as a progress line.
    async fn load(&self, state: &mut FolderState) -> Result<(), ApiError> {
        let request = state.begin_load()?;
        if self.progress {
            eprintln!("{}", phase_line(&state.snapshot()));
        }
        debug!(path = %request.path(), "Dispatching listing request");
        let outcome = request.run().await;
        state.finish_load(outcome)?;
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}
