//! todo.txt MCP Server Library
//!
//! This library reads todo.txt lines embedded in plain-text notes, turns them into
//! structured, due-aware task items, orders them for display, and writes edited
//! items back into their notes. It is exposed as a Model Context Protocol (MCP)
//! server over stdio.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` module - Pure todo.txt parsing, classification, sorting and serialization
//! - **Persistence Layer**: `storage` module - File-based TOML note store
//!
//! # Example
//!
//! ```no_run
//! use todotxt_mcp::{Config, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("notes.toml", Config::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
pub mod handlers;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use config::Config;
pub use storage::{Note, NoteStore, Notes};
pub use todo::{DueStatus, DueThresholds, ParseContext, TagKind, TodoItem};

/// MCP Server handler for todo.txt task lists kept in notes
///
/// Every tool call parses the notes afresh against a single sampled
/// reference instant, so due buckets are consistent within one response.
/// Edits are persisted to the TOML notes file immediately.
pub struct TodoServerHandler {
    pub(crate) notes: Mutex<Notes>,
    pub(crate) store: NoteStore,
    pub(crate) config: Config,
}

impl TodoServerHandler {
    /// Create a new todo.txt server handler
    ///
    /// # Arguments
    /// * `notes_path` - Path to the notes file (TOML format)
    /// * `config` - Due-date thresholds and other settings
    ///
    /// # Returns
    /// Result containing the handler, or an error if the configuration is
    /// invalid or the notes file cannot be read
    pub fn new(notes_path: &str, config: Config) -> Result<Self> {
        config.validate()?;
        let store = NoteStore::new(notes_path);
        let notes = Mutex::new(store.load()?);
        Ok(Self {
            notes,
            store,
            config,
        })
    }

    /// Sample the clock once for the current tool call
    pub(crate) fn parse_context(&self) -> ParseContext {
        ParseContext::sample(self.config.due)
    }

    /// Write an edited copy of the notes to disk, then make it current
    ///
    /// The in-memory notes are left untouched when the write fails.
    fn commit_notes(&self, notes: &mut Notes, updated: Notes) -> Result<()> {
        self.store.save(&updated)?;
        *notes = updated;
        Ok(())
    }
}

/// todo.txt task server for plain-text notes.
///
/// Notes may contain todo.txt lines such as `x (A) 2024-01-05 2024-01-01 Pay rent +bills @home due:2024-01-10`:
/// - **x**: completed marker (first token)
/// - **(A)**: priority
/// - **dates**: completion date then creation date, or a creation date alone
/// - **+project / @context**: tags
/// - **due:YYYY-MM-DD**: due date, classified as overdue / due today / due in a day / week / month / not due yet
///
/// Lists are ordered: overdue, due today, due in a day, prioritized (A first), the rest, then completed (newest first).
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Review**: List every task across all notes in display order.
    /// **Filters**: project (e.g. "+bills" or "bills"), context (e.g. "@home"), keyword (case-insensitive).
    /// **Tip**: Note ID and hash shown per item are the inputs for complete().
    #[tool]
    async fn list(
        &self,
        /// Project tag filter (optional)
        project: Option<String>,
        /// Context tag filter (optional)
        context: Option<String>,
        /// Keyword to search in descriptions (optional)
        keyword: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(project, context, keyword).await
    }

    /// **Vocabulary**: Distinct project or context tags used by open tasks, in first-seen order.
    #[tool]
    async fn tags(
        &self,
        /// Tag kind: "project" or "context"
        kind: String,
    ) -> McpResult<String> {
        self.handle_tags(kind).await
    }

    /// **Do**: Mark a task done, or reopen it with done=false. The line is rewritten in canonical form.
    #[tool]
    async fn complete(
        &self,
        /// Note ID containing the task
        note_id: i64,
        /// Hash of the task line as shown by list()
        hash: i32,
        /// true to complete (default), false to reopen
        done: Option<bool>,
    ) -> McpResult<String> {
        self.handle_complete(note_id, hash, done).await
    }
}
