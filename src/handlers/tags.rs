//! Tags handler for the todo.txt MCP server

use crate::TodoServerHandler;
use crate::todo;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Handles tag vocabulary requests - distinct project or context tags of open items.
    pub async fn handle_tags(&self, kind: String) -> McpResult<String> {
        let tag_kind = validation::parse_tag_kind(&kind)?;
        let ctx = self.parse_context();

        let notes = self.notes.lock().unwrap();
        let batch = todo::parse_notes(&notes.sources(), &ctx);
        drop(notes);

        let tags = todo::extract_tags(&batch.items, tag_kind);
        if tags.is_empty() {
            return Ok("No tags found".to_string());
        }
        Ok(tags.join("\n"))
    }
}
