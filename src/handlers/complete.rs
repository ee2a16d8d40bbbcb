//! Complete handler for the todo.txt MCP server

use crate::TodoServerHandler;
use crate::todo;
use crate::validation;
use mcp_attr::{Result as McpResult, bail, bail_public};
use tracing::info;

impl TodoServerHandler {
    /// **Do**: Mark a task done (or reopen it) and write the line back into its note.
    /// **Lookup**: The line is identified by note ID plus the hash shown by list().
    pub async fn handle_complete(
        &self,
        note_id: i64,
        hash: i32,
        done: Option<bool>,
    ) -> McpResult<String> {
        let ctx = self.parse_context();
        let mut notes = self.notes.lock().unwrap();

        let note = match notes.find(note_id) {
            Some(n) => n,
            None => {
                let error_msg = validation::format_invalid_note_error(note_id, &notes);
                drop(notes);
                bail_public!(_, "{}", error_msg);
            }
        };

        let batch = todo::parse_note(&note.content, Some(note_id), &ctx);
        let item = match batch.items.into_iter().find(|i| i.content_hash == hash) {
            Some(i) => i,
            None => {
                drop(notes);
                bail_public!(
                    _,
                    "Item not found: note {} has no task with hash {}. Use list() to see current hashes.",
                    note_id,
                    hash
                );
            }
        };

        let updated = item.with_completed(done.unwrap_or(true), ctx.now.date());
        let mut edited = notes.clone();
        if let Err(e) = edited.replace_line(note_id, hash, &updated.full_text) {
            drop(notes);
            bail_public!(_, "{}", e);
        }

        // lock stays held across the write
        if let Err(e) = self.commit_notes(&mut notes, edited) {
            drop(notes);
            bail!("Failed to save: {}", e);
        }
        drop(notes);

        info!(note_id, old_hash = hash, new_hash = updated.content_hash, "rewrote todo line");
        Ok(format!(
            "Updated note {}: {}\nNew hash: {}",
            note_id,
            updated.full_text.trim_end(),
            updated.content_hash
        ))
    }
}
